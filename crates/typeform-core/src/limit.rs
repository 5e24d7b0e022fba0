//! Declarative bound specifications.
//!
//! A [`Limit`] pairs a comparator name with two ordered bound sets. The
//! candidate satisfies the limit when the named relation holds between
//! every left bound and the candidate (`bound cmp candidate`) and
//! between the candidate and every right bound (`candidate cmp bound`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A single limit: comparator name plus left/right bound sets.
///
/// Both bound sets may be empty; an empty side is vacuously satisfied.
/// The comparator name is resolved against the candidate's runtime type
/// at check time, never at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    /// Name of the binary relation, resolved per candidate type.
    pub comparator: String,
    /// Bounds compared as `bound cmp candidate`.
    #[serde(default)]
    pub left_bounds: Vec<Value>,
    /// Bounds compared as `candidate cmp bound`.
    #[serde(default)]
    pub right_bounds: Vec<Value>,
}

impl Limit {
    /// Creates a limit from a comparator name and both bound sets.
    pub fn new(
        comparator: impl Into<String>,
        left_bounds: Vec<Value>,
        right_bounds: Vec<Value>,
    ) -> Self {
        Limit {
            comparator: comparator.into(),
            left_bounds,
            right_bounds,
        }
    }

    /// Creates a limit with only left bounds.
    pub fn left(comparator: impl Into<String>, bounds: Vec<Value>) -> Self {
        Limit::new(comparator, bounds, Vec::new())
    }

    /// Creates a limit with only right bounds.
    pub fn right(comparator: impl Into<String>, bounds: Vec<Value>) -> Self {
        Limit::new(comparator, Vec::new(), bounds)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |bounds: &[Value]| {
            bounds
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "'{}' left: [{}] right: [{}]",
            self.comparator,
            join(&self.left_bounds),
            join(&self.right_bounds)
        )
    }
}
