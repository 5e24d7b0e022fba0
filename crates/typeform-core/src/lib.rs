pub mod error;
pub mod former;
pub mod limit;
pub mod registry;
pub mod value;

// Re-export commonly used types
pub use error::{CoreError, FormError};
pub use former::{Blueprint, Composite, Structor};
pub use limit::Limit;
pub use registry::{compare_values, Comparator, ComparatorRegistry};
pub use value::{TypeTag, Value};
