//! Error types for the interactive input reader.

use thiserror::Error;
use typeform_check::CheckError;

/// Failure modes of a single coercion attempt.
///
/// The split decides the reader's recovery behavior: `Value` errors are
/// reported to the user and the loop retries, `Type` errors mean the
/// coercion itself is unusable for text input and propagate immediately.
#[derive(Debug, Error)]
pub enum CoerceError {
    /// This specific input text is unparsable; another answer may work.
    #[error("{message}")]
    Value { message: String },

    /// The coercion is fundamentally inapplicable to text input.
    #[error("{message}")]
    Type { message: String },
}

/// Errors produced by the interactive input reader.
#[derive(Debug, Error)]
pub enum AskError {
    /// The answer type name is not in the registry.
    #[error("unknown type name: '{name}'")]
    UnknownTypeName { name: String },

    /// Registering a type name that already exists in the registry.
    #[error("duplicate type name: '{name}'")]
    DuplicateTypeName { name: String },

    /// The resolved coercion cannot accept text input at all. Not
    /// retried: the answer type is a bad choice, not the answer.
    #[error("type '{type_name}' cannot coerce text input: {message}")]
    CoercionType { type_name: String, message: String },

    /// The input source reached end-of-stream before an answer was
    /// accepted.
    #[error("input closed before an answer was accepted")]
    InputClosed,

    /// Limit checking failed fatally (type incompatibility).
    #[error(transparent)]
    Check(#[from] CheckError),

    /// Prompt or report I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
