//! Error types for the limit-checking engine.
//!
//! Check failures carry a preassembled, human-readable report built by
//! the report module from the full limit list and the relevant matrix;
//! no partial state is left behind since matrices are computed fresh
//! per call.

use thiserror::Error;

/// Errors produced by [`check_limits`](crate::checker::check_limits)
/// and its phase functions.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Some limit's comparator or bounds mismatch the candidate's type.
    /// Raised regardless of verbose mode.
    #[error("{report}")]
    TypeIncompatible { report: String },

    /// The candidate fails some limit (non-verbose mode only).
    #[error("{report}")]
    LimitsNotMet { report: String },

    /// A comparator name failed to resolve during evaluation. Only
    /// reachable when phase 2 is invoked directly without a prior
    /// compatibility pass.
    #[error("comparator '{name}' is not defined for type {type_name}")]
    UnknownComparator {
        name: String,
        type_name: &'static str,
    },
}

/// Errors produced by the generic string-joiner.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The separator value cannot supply a separator for every join.
    /// Programmer error, fatal.
    #[error("invalid separator kind: {detail}")]
    InvalidSeparatorKind { detail: String },
}
