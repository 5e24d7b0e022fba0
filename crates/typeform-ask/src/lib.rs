//! Interactive input reading for typeform.
//!
//! [`ask_user`] turns a question, an answer type name, and an optional
//! limit list into a validated [`Value`](typeform_core::Value), looping
//! over an injectable input source and output sink until an answer is
//! accepted.

pub mod error;
pub mod reader;
pub mod registry;

pub use error::{AskError, CoerceError};
pub use reader::ask_user;
pub use registry::{CoerceFn, TypeNameRegistry};
