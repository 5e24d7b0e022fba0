//! Core error types for typeform-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the failure modes of the registries and the composite former.

use thiserror::Error;

/// Core errors produced by the typeform-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Registering a comparator name that already exists for the type.
    #[error("duplicate comparator '{name}' for type {type_name}")]
    DuplicateComparator {
        name: String,
        type_name: &'static str,
    },
}

/// Errors produced while forming or unforming composites.
#[derive(Debug, Error)]
pub enum FormError {
    /// The argument count does not match the blueprint's field count.
    #[error("blueprint '{blueprint}' expects {expected} field(s), got {actual}")]
    WrongArity {
        blueprint: String,
        expected: usize,
        actual: usize,
    },

    /// A positional argument's runtime type does not match its field tag.
    #[error(
        "blueprint '{blueprint}' field '{field}' expects {expected}, got {actual}"
    )]
    FieldTypeMismatch {
        blueprint: String,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A composite was handed to a structor for a different blueprint.
    #[error("composite was formed from blueprint '{actual}', expected '{expected}'")]
    BlueprintMismatch { expected: String, actual: String },
}
