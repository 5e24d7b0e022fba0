//! Two-phase limit checking.
//!
//! Phase 1 ([`type_check_limits`]) verifies every limit is usable with
//! the candidate's runtime type: the comparator name resolves and every
//! bound on both sides matches the candidate's type. Phase 2
//! ([`evaluate_limits`]) is only reached when phase 1 is fully clean and
//! evaluates the named relation against every bound.
//!
//! Both phases are pure over their inputs; each call computes fresh
//! matrices.

use typeform_core::{ComparatorRegistry, Limit, Value};

use crate::error::CheckError;
use crate::matrix::{
    BoolRow, SatisfactionEntry, SatisfactionMatrix, TypeCheckEntry, TypeCheckMatrix,
};
use crate::report::{
    format_failure_report, rows_from_satisfaction, rows_from_type_check, ReportKind,
};

/// Successful outcome of [`check_limits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every limit is satisfied.
    Passed,
    /// Some limit is unsatisfied; verbose mode returns the full matrix
    /// instead of raising, so the caller can inspect which bounds failed.
    Unsatisfied(SatisfactionMatrix),
}

/// Phase 1: computes type compatibility of every limit against the
/// candidate, one entry per limit in original order.
pub fn type_check_limits(
    candidate: &Value,
    limits: &[Limit],
    registry: &ComparatorRegistry,
) -> TypeCheckMatrix {
    let tag = candidate.type_tag();

    let entries = limits
        .iter()
        .map(|limit| TypeCheckEntry {
            comparator_known: registry.contains(tag, &limit.comparator),
            left: bounds_match(candidate, &limit.left_bounds),
            right: bounds_match(candidate, &limit.right_bounds),
        })
        .collect();

    TypeCheckMatrix { entries }
}

/// One boolean per bound: does the bound's runtime type match the
/// candidate's.
fn bounds_match(candidate: &Value, bounds: &[Value]) -> BoolRow {
    bounds.iter().map(|b| candidate.same_type(b)).collect()
}

/// Phase 2: evaluates every limit's comparator against every bound.
///
/// Left bounds are checked as `bound cmp candidate`, right bounds as
/// `candidate cmp bound`. Callers normally run
/// [`type_check_limits`] first; a comparator that fails to resolve here
/// is reported as [`CheckError::UnknownComparator`].
pub fn evaluate_limits(
    candidate: &Value,
    limits: &[Limit],
    registry: &ComparatorRegistry,
) -> Result<SatisfactionMatrix, CheckError> {
    let tag = candidate.type_tag();
    let mut entries = Vec::with_capacity(limits.len());

    for limit in limits {
        let compare = registry.resolve(tag, &limit.comparator).ok_or_else(|| {
            CheckError::UnknownComparator {
                name: limit.comparator.clone(),
                type_name: tag.name(),
            }
        })?;

        let left: BoolRow = limit
            .left_bounds
            .iter()
            .map(|bound| compare(bound, candidate))
            .collect();
        let right: BoolRow = limit
            .right_bounds
            .iter()
            .map(|bound| compare(candidate, bound))
            .collect();

        entries.push(SatisfactionEntry { left, right });
    }

    Ok(SatisfactionMatrix { entries })
}

/// Checks whether `candidate` meets `limits`.
///
/// Type incompatibility is never tolerated silently: any limit that is
/// not type-clean fails with [`CheckError::TypeIncompatible`] regardless
/// of `verbose`, carrying a report built from the full limit list and
/// the compatibility matrix.
///
/// When every limit is type-clean:
/// - all limits satisfied: `Ok(CheckOutcome::Passed)`;
/// - some limit unsatisfied, `verbose`: `Ok(CheckOutcome::Unsatisfied)`
///   with the full satisfaction matrix;
/// - some limit unsatisfied, not `verbose`:
///   `Err(CheckError::LimitsNotMet)` with a report.
///
/// An empty limit list passes trivially.
pub fn check_limits(
    candidate: &Value,
    limits: &[Limit],
    registry: &ComparatorRegistry,
    verbose: bool,
) -> Result<CheckOutcome, CheckError> {
    let type_matrix = type_check_limits(candidate, limits, registry);
    if !type_matrix.is_clean() {
        let rows = rows_from_type_check(&type_matrix);
        return Err(CheckError::TypeIncompatible {
            report: format_failure_report(limits, &rows, ReportKind::TypeCheck),
        });
    }

    // Phase 1 passed, so every comparator resolves.
    let satisfaction = evaluate_limits(candidate, limits, registry)?;

    if satisfaction.all_met() {
        return Ok(CheckOutcome::Passed);
    }

    if verbose {
        Ok(CheckOutcome::Unsatisfied(satisfaction))
    } else {
        let rows = rows_from_satisfaction(&satisfaction);
        Err(CheckError::LimitsNotMet {
            report: format_failure_report(limits, &rows, ReportKind::Satisfaction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ComparatorRegistry {
        ComparatorRegistry::new()
    }

    // -----------------------------------------------------------------------
    // type_check_limits
    // -----------------------------------------------------------------------

    #[test]
    fn clean_limit_over_matching_types() {
        let limits = vec![Limit::new(
            "less-than",
            vec![Value::Int(1), Value::Int(2)],
            vec![Value::Int(10)],
        )];
        let matrix = type_check_limits(&Value::Int(5), &limits, &registry());
        assert!(matrix.is_clean());
        assert_eq!(matrix.entries[0].summary(), (true, true, true));
    }

    #[test]
    fn unknown_comparator_is_not_clean() {
        let limits = vec![Limit::left("approximately", vec![Value::Int(1)])];
        let matrix = type_check_limits(&Value::Int(5), &limits, &registry());
        assert!(!matrix.is_clean());
        assert!(!matrix.entries[0].comparator_known);
    }

    #[test]
    fn mixed_type_bounds_flagged_per_element() {
        let limits = vec![Limit::new(
            "less-than",
            vec![Value::Int(1), Value::Float(2.0), Value::Int(3)],
            vec![Value::from("ten")],
        )];
        let matrix = type_check_limits(&Value::Int(5), &limits, &registry());
        let entry = &matrix.entries[0];
        assert!(entry.comparator_known);
        assert_eq!(entry.left.as_slice(), &[true, false, true]);
        assert_eq!(entry.right.as_slice(), &[false]);
    }

    #[test]
    fn bool_candidate_has_no_ordering_comparator() {
        let limits = vec![Limit::right("less-than", vec![Value::Bool(true)])];
        let matrix = type_check_limits(&Value::Bool(false), &limits, &registry());
        assert!(!matrix.entries[0].comparator_known);
    }

    // -----------------------------------------------------------------------
    // evaluate_limits
    // -----------------------------------------------------------------------

    #[test]
    fn left_bounds_compare_bound_against_candidate() {
        // "less-than" with left bounds means bound < candidate.
        let limits = vec![Limit::left(
            "less-than",
            vec![Value::Int(1), Value::Int(10)],
        )];
        let matrix = evaluate_limits(&Value::Int(5), &limits, &registry()).unwrap();
        assert_eq!(matrix.entries[0].left.as_slice(), &[true, false]);
    }

    #[test]
    fn right_bounds_compare_candidate_against_bound() {
        let limits = vec![Limit::right(
            "less-than",
            vec![Value::Int(10), Value::Int(3)],
        )];
        let matrix = evaluate_limits(&Value::Int(5), &limits, &registry()).unwrap();
        assert_eq!(matrix.entries[0].right.as_slice(), &[true, false]);
    }

    #[test]
    fn unknown_comparator_errors_in_direct_evaluation() {
        let limits = vec![Limit::left("approximately", vec![Value::Int(1)])];
        let result = evaluate_limits(&Value::Int(5), &limits, &registry());
        assert!(matches!(
            result,
            Err(CheckError::UnknownComparator { ref name, .. }) if name == "approximately"
        ));
    }

    // -----------------------------------------------------------------------
    // check_limits
    // -----------------------------------------------------------------------

    #[test]
    fn empty_limit_list_passes_for_any_candidate() {
        let reg = registry();
        for candidate in [
            Value::Int(5),
            Value::Float(0.5),
            Value::Bool(true),
            Value::from("text"),
        ] {
            let outcome = check_limits(&candidate, &[], &reg, false).unwrap();
            assert_eq!(outcome, CheckOutcome::Passed);
        }
    }

    #[test]
    fn fully_satisfied_limits_pass() {
        let limits = vec![Limit::new(
            "less-than",
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
            vec![Value::Int(10), Value::Int(20)],
        )];
        let outcome = check_limits(&Value::Int(5), &limits, &registry(), false).unwrap();
        assert_eq!(outcome, CheckOutcome::Passed);
    }

    #[test]
    fn type_incompatibility_raises_even_in_verbose_mode() {
        let limits = vec![Limit::left("approximately", vec![Value::Int(1)])];
        for verbose in [false, true] {
            let result = check_limits(&Value::Int(5), &limits, &registry(), verbose);
            match result {
                Err(CheckError::TypeIncompatible { report }) => {
                    assert!(report.contains("Limit 0 "));
                    assert!(report.contains("'approximately' is not defined"));
                }
                other => panic!("expected TypeIncompatible, got {:?}", other),
            }
        }
    }

    #[test]
    fn type_report_names_exactly_the_bad_limit() {
        let limits = vec![
            Limit::left("less-than", vec![Value::Int(1)]),
            Limit::left("approximately", vec![Value::Int(1)]),
        ];
        let result = check_limits(&Value::Int(5), &limits, &registry(), false);
        match result {
            Err(CheckError::TypeIncompatible { report }) => {
                assert!(report.contains("Limit 1 "));
                assert!(!report.contains("Limit 0 "));
            }
            other => panic!("expected TypeIncompatible, got {:?}", other),
        }
    }

    #[test]
    fn unsatisfied_nonverbose_raises_limits_not_met() {
        let limits = vec![Limit::right("less-than", vec![Value::Int(3)])];
        let result = check_limits(&Value::Int(5), &limits, &registry(), false);
        match result {
            Err(CheckError::LimitsNotMet { report }) => {
                assert!(report.starts_with("The following limit(s) are not met:"));
                assert!(report.contains("the right bounds at indices [0] are not met"));
            }
            other => panic!("expected LimitsNotMet, got {:?}", other),
        }
    }

    #[test]
    fn unsatisfied_verbose_returns_the_matrix() {
        // candidate = 5, left bounds [1, 10] under "less-than": 1 < 5
        // holds, 10 < 5 does not.
        let limits = vec![Limit::left(
            "less-than",
            vec![Value::Int(1), Value::Int(10)],
        )];
        let outcome = check_limits(&Value::Int(5), &limits, &registry(), true).unwrap();
        match outcome {
            CheckOutcome::Unsatisfied(matrix) => {
                assert_eq!(matrix.entries[0].left.as_slice(), &[true, false]);
                assert!(matrix.entries[0].right.is_empty());
            }
            CheckOutcome::Passed => panic!("expected Unsatisfied"),
        }
    }

    #[test]
    fn empty_bound_sets_are_vacuously_satisfied() {
        let limits = vec![Limit::new("less-than", vec![], vec![])];
        let outcome = check_limits(&Value::Int(5), &limits, &registry(), false).unwrap();
        assert_eq!(outcome, CheckOutcome::Passed);
    }

    #[test]
    fn text_candidate_with_lexicographic_bounds() {
        let limits = vec![Limit::new(
            "less-than",
            vec![Value::from("apple")],
            vec![Value::from("zebra")],
        )];
        let outcome =
            check_limits(&Value::from("mango"), &limits, &registry(), false).unwrap();
        assert_eq!(outcome, CheckOutcome::Passed);
    }

    #[test]
    fn custom_comparator_participates_in_checking() {
        use std::sync::Arc;
        use typeform_core::TypeTag;

        let mut reg = registry();
        reg.register(
            TypeTag::Int,
            "divides",
            Arc::new(|a, b| match (a, b) {
                (Value::Int(x), Value::Int(y)) => *x != 0 && y % x == 0,
                _ => false,
            }),
        )
        .unwrap();

        // 3 and 4 as left bounds of "divides": bound divides candidate.
        let limits = vec![Limit::left(
            "divides",
            vec![Value::Int(3), Value::Int(4)],
        )];
        let outcome = check_limits(&Value::Int(12), &limits, &reg, true).unwrap();
        match outcome {
            CheckOutcome::Unsatisfied(_) => panic!("12 is divisible by both 3 and 4"),
            CheckOutcome::Passed => {}
        }
    }

    // -----------------------------------------------------------------------
    // randomized coverage
    // -----------------------------------------------------------------------

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any int candidate passes an empty limit list.
            #[test]
            fn empty_limits_always_pass(candidate in any::<i64>()) {
                let outcome =
                    check_limits(&Value::Int(candidate), &[], &registry(), false).unwrap();
                prop_assert_eq!(outcome, CheckOutcome::Passed);
            }

            /// The verbose matrix agrees with direct comparator evaluation
            /// for every bound.
            #[test]
            fn verbose_matrix_matches_direct_evaluation(
                candidate in any::<i64>(),
                left in prop::collection::vec(any::<i64>(), 0..6),
                right in prop::collection::vec(any::<i64>(), 0..6),
            ) {
                let limits = vec![Limit::new(
                    "less-than",
                    left.iter().copied().map(Value::Int).collect(),
                    right.iter().copied().map(Value::Int).collect(),
                )];

                let matrix =
                    evaluate_limits(&Value::Int(candidate), &limits, &registry()).unwrap();
                let entry = &matrix.entries[0];

                for (i, bound) in left.iter().enumerate() {
                    prop_assert_eq!(entry.left[i], *bound < candidate);
                }
                for (i, bound) in right.iter().enumerate() {
                    prop_assert_eq!(entry.right[i], candidate < *bound);
                }
            }

            /// check_limits never reports LimitsNotMet when every bound
            /// holds, and never Passed when one fails.
            #[test]
            fn outcome_agrees_with_satisfaction(
                candidate in -100i64..100,
                bounds in prop::collection::vec(-100i64..100, 1..5),
            ) {
                let limits = vec![Limit::right(
                    "greater-or-equal",
                    bounds.iter().copied().map(Value::Int).collect(),
                )];
                let expected = bounds.iter().all(|b| candidate >= *b);

                let result = check_limits(&Value::Int(candidate), &limits, &registry(), false);
                match result {
                    Ok(CheckOutcome::Passed) => prop_assert!(expected),
                    Err(CheckError::LimitsNotMet { .. }) => prop_assert!(!expected),
                    other => prop_assert!(false, "unexpected result: {:?}", other),
                }
            }
        }
    }
}
