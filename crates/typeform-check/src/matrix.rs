//! Per-check result matrices.
//!
//! Both matrices are transient: recomputed on every check invocation,
//! never persisted. [`TypeCheckMatrix`] is the phase-1 result (is every
//! limit usable with the candidate's type), [`SatisfactionMatrix`] the
//! phase-2 result (does the candidate actually meet every limit).
//!
//! Per-bound booleans are retained rather than per-side aggregates so
//! the report formatter can name the indices of the specific bounds
//! that failed; the aggregate views are derived.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One boolean per bound. Limits rarely carry more than a handful of
/// bounds per side, so rows stay inline.
pub type BoolRow = SmallVec<[bool; 4]>;

/// Phase-1 row: type compatibility of one limit against the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCheckEntry {
    /// Whether the comparator name resolves for the candidate's type.
    pub comparator_known: bool,
    /// Per-bound: does this left bound match the candidate's type.
    pub left: BoolRow,
    /// Per-bound: does this right bound match the candidate's type.
    pub right: BoolRow,
}

impl TypeCheckEntry {
    /// A limit is type-clean iff the comparator resolves and every bound
    /// on both sides matches the candidate's type.
    pub fn is_clean(&self) -> bool {
        self.comparator_known
            && self.left.iter().all(|b| *b)
            && self.right.iter().all(|b| *b)
    }

    /// The aggregate 3-tuple view: (comparator defined, left side fully
    /// compatible, right side fully compatible).
    pub fn summary(&self) -> (bool, bool, bool) {
        (
            self.comparator_known,
            self.left.iter().all(|b| *b),
            self.right.iter().all(|b| *b),
        )
    }
}

/// Phase-1 result over a whole limit list, one entry per limit in
/// original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCheckMatrix {
    pub entries: Vec<TypeCheckEntry>,
}

impl TypeCheckMatrix {
    /// `true` iff every limit is type-clean. An empty limit list is
    /// trivially clean.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(TypeCheckEntry::is_clean)
    }
}

/// Phase-2 row: which bounds of one limit the candidate satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionEntry {
    /// Per left bound: does `bound cmp candidate` hold.
    pub left: BoolRow,
    /// Per right bound: does `candidate cmp bound` hold.
    pub right: BoolRow,
}

impl SatisfactionEntry {
    /// A limit is satisfied iff both sequences are entirely true.
    /// Empty sides are vacuously true.
    pub fn is_met(&self) -> bool {
        self.left.iter().all(|b| *b) && self.right.iter().all(|b| *b)
    }
}

/// Phase-2 result over a whole limit list, one entry per limit in
/// original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionMatrix {
    pub entries: Vec<SatisfactionEntry>,
}

impl SatisfactionMatrix {
    /// `true` iff every limit is satisfied. An empty limit list is
    /// trivially satisfied.
    pub fn all_met(&self) -> bool {
        self.entries.iter().all(SatisfactionEntry::is_met)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn empty_matrices_pass_trivially() {
        let types = TypeCheckMatrix { entries: vec![] };
        assert!(types.is_clean());

        let sat = SatisfactionMatrix { entries: vec![] };
        assert!(sat.all_met());
    }

    #[test]
    fn empty_bound_rows_are_vacuously_true() {
        let entry = SatisfactionEntry {
            left: smallvec![],
            right: smallvec![],
        };
        assert!(entry.is_met());

        let entry = TypeCheckEntry {
            comparator_known: true,
            left: smallvec![],
            right: smallvec![],
        };
        assert!(entry.is_clean());
    }

    #[test]
    fn unknown_comparator_dirties_entry() {
        let entry = TypeCheckEntry {
            comparator_known: false,
            left: smallvec![true],
            right: smallvec![true],
        };
        assert!(!entry.is_clean());
        assert_eq!(entry.summary(), (false, true, true));
    }

    #[test]
    fn single_false_bound_dirties_side() {
        let entry = TypeCheckEntry {
            comparator_known: true,
            left: smallvec![true, false, true],
            right: smallvec![true],
        };
        assert!(!entry.is_clean());
        assert_eq!(entry.summary(), (true, false, true));
    }

    #[test]
    fn satisfaction_requires_both_sides() {
        let entry = SatisfactionEntry {
            left: smallvec![true, true],
            right: smallvec![true, false],
        };
        assert!(!entry.is_met());
    }

    #[test]
    fn matrix_serializes_to_json() {
        let matrix = SatisfactionMatrix {
            entries: vec![SatisfactionEntry {
                left: smallvec![true, false],
                right: smallvec![],
            }],
        };
        let json = serde_json::to_string(&matrix).unwrap();
        let back: SatisfactionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }
}
