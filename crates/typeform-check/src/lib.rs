//! Limit-checking engine for typeform.
//!
//! Provides the two-phase validator and its report formatter:
//! - [`check_limits`]: verifies a limit list is type-compatible with a
//!   candidate, then whether the candidate satisfies every limit.
//! - [`type_check_limits`] / [`evaluate_limits`]: the two phases,
//!   callable on their own.
//! - [`format_failure_report`] / [`auto_format`]: narrative assembly
//!   from a limit list plus a pass/fail matrix.
//!
//! All checking is pure -- matrices are computed fresh per call and
//! nothing persists between invocations.

pub mod checker;
pub mod error;
pub mod matrix;
pub mod report;

pub use checker::{check_limits, evaluate_limits, type_check_limits, CheckOutcome};
pub use error::{CheckError, FormatError};
pub use matrix::{
    BoolRow, SatisfactionEntry, SatisfactionMatrix, TypeCheckEntry, TypeCheckMatrix,
};
pub use report::{
    auto_format, failure_fragments, format_failure_report, rows_from_satisfaction,
    rows_from_type_check, ReportKind, ReportRow, Separator,
};
