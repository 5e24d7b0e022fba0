//! Failure report assembly.
//!
//! Turns a limit list plus a pass/fail matrix into a multi-section,
//! human-readable narrative. Only failing limits are reported, in
//! original list order. Fragments are produced lazily, one per failing
//! limit; the sequence is finite and restartable only by calling
//! [`failure_fragments`] again.
//!
//! [`auto_format`] is the generic string-joiner underneath: it supports
//! a single joining string, a positional list of separators, and a lazy
//! separator sequence, all producing identical output for equivalent
//! inputs.

use std::fmt;

use typeform_core::Limit;

use crate::error::FormatError;
use crate::matrix::{SatisfactionMatrix, TypeCheckMatrix};

/// Which phase a report describes; selects wording and header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Phase-1 report: limits incompatible with the candidate's type.
    TypeCheck,
    /// Phase-2 report: limits the candidate does not meet.
    Satisfaction,
}

impl ReportKind {
    /// The per-limit condition word.
    pub fn condition(&self) -> &'static str {
        match self {
            ReportKind::TypeCheck => "incompatible",
            ReportKind::Satisfaction => "not met",
        }
    }

    /// The report header line.
    pub fn header(&self) -> &'static str {
        match self {
            ReportKind::TypeCheck => {
                "The following limit(s) do not have compatible type(s):"
            }
            ReportKind::Satisfaction => "The following limit(s) are not met:",
        }
    }
}

/// How `auto_format` chooses the separator between consecutive items.
///
/// The three kinds are interchangeable: for equivalent inputs they
/// produce the same joined output. `Lazy` is one-shot by construction;
/// restarting means building a fresh separator.
pub enum Separator<'a> {
    /// One string, reused between every pair of items.
    Text(String),
    /// Positional separators, `list[i]` between item `i` and item `i+1`.
    EachItem(Vec<String>),
    /// A lazily-produced sequence, one separator pulled per join.
    Lazy(Box<dyn Iterator<Item = String> + 'a>),
}

/// Joins the items of `collection` selected by `selection`, bracketed by
/// `pre` and `end`, with `sep` between consecutive selected items.
///
/// A separator source that cannot supply a separator for every join --
/// a positional list shorter than the number of joins, or a lazy
/// sequence that runs dry -- is unusable as a separator and fails with
/// [`FormatError::InvalidSeparatorKind`].
pub fn auto_format<T: fmt::Display>(
    collection: &[T],
    selection: &[bool],
    pre: &str,
    sep: Separator<'_>,
    end: &str,
) -> Result<String, FormatError> {
    let selected: Vec<String> = collection
        .iter()
        .zip(selection)
        .filter(|(_, keep)| **keep)
        .map(|(item, _)| item.to_string())
        .collect();

    let joins = selected.len().saturating_sub(1);

    let joined = match sep {
        Separator::Text(text) => selected.join(&text),
        Separator::EachItem(list) => {
            if list.len() < joins {
                return Err(FormatError::InvalidSeparatorKind {
                    detail: format!(
                        "positional separator list has {} entr(ies) but {} join(s) are needed",
                        list.len(),
                        joins
                    ),
                });
            }
            let mut out = String::new();
            for (i, item) in selected.iter().enumerate() {
                if i > 0 {
                    out.push_str(&list[i - 1]);
                }
                out.push_str(item);
            }
            out
        }
        Separator::Lazy(mut source) => {
            let mut out = String::new();
            for (i, item) in selected.iter().enumerate() {
                if i > 0 {
                    let sep = source.next().ok_or_else(|| {
                        FormatError::InvalidSeparatorKind {
                            detail: format!(
                                "lazy separator sequence ran dry after {} of {} join(s)",
                                i - 1,
                                joins
                            ),
                        }
                    })?;
                    out.push_str(&sep);
                }
                out.push_str(item);
            }
            out
        }
    };

    Ok(format!("{}{}{}", pre, joined, end))
}

/// Normalized per-limit row consumed by the formatter, shared between
/// the two matrix shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// `false` only in phase-1 rows whose comparator failed to resolve.
    pub comparator_known: bool,
    pub left: Vec<bool>,
    pub right: Vec<bool>,
}

impl ReportRow {
    /// Logical AND over the whole row.
    pub fn is_pass(&self) -> bool {
        self.comparator_known
            && self.left.iter().all(|b| *b)
            && self.right.iter().all(|b| *b)
    }
}

/// Rows for a phase-1 report.
pub fn rows_from_type_check(matrix: &TypeCheckMatrix) -> Vec<ReportRow> {
    matrix
        .entries
        .iter()
        .map(|entry| ReportRow {
            comparator_known: entry.comparator_known,
            left: entry.left.to_vec(),
            right: entry.right.to_vec(),
        })
        .collect()
}

/// Rows for a phase-2 report. Satisfaction rows always have a resolved
/// comparator (phase 1 ran first).
pub fn rows_from_satisfaction(matrix: &SatisfactionMatrix) -> Vec<ReportRow> {
    matrix
        .entries
        .iter()
        .map(|entry| ReportRow {
            comparator_known: true,
            left: entry.left.to_vec(),
            right: entry.right.to_vec(),
        })
        .collect()
}

/// Lazily yields one report fragment per failing limit, in original
/// list order. Passing limits are skipped entirely.
pub fn failure_fragments<'a>(
    limits: &'a [Limit],
    rows: &'a [ReportRow],
    kind: ReportKind,
) -> impl Iterator<Item = String> + 'a {
    limits
        .iter()
        .zip(rows)
        .enumerate()
        .filter(|(_, (_, row))| !row.is_pass())
        .map(move |(index, (limit, row))| fragment(index, limit, row, kind))
}

/// Builds the fragment for one failing limit.
fn fragment(index: usize, limit: &Limit, row: &ReportRow, kind: ReportKind) -> String {
    let condition = kind.condition();
    let mut out = format!("Limit {} ({}) is {} because...", index, limit, condition);

    if !row.comparator_known {
        out.push_str(&format!(
            "\n  the comparison operator '{}' is not defined for the candidate's type",
            limit.comparator
        ));
    }

    for (side, bounds) in [("left", &row.left), ("right", &row.right)] {
        if bounds.iter().any(|ok| !ok) {
            let indices = failing_indices(bounds);
            out.push_str(&format!(
                "\n  the {} bounds at indices [{}] are {}",
                side, indices, condition
            ));
        }
    }

    out
}

/// 0-based indices of the false entries, comma-joined.
fn failing_indices(bounds: &[bool]) -> String {
    bounds
        .iter()
        .enumerate()
        .filter(|(_, ok)| !**ok)
        .map(|(i, _)| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assembles the full multi-line report: header plus one fragment per
/// failing limit.
///
/// The fragment sequence is generated lazily and consumed by the
/// newline joiner here; a fresh call rebuilds it from scratch.
pub fn format_failure_report(limits: &[Limit], rows: &[ReportRow], kind: ReportKind) -> String {
    let mut out = String::from(kind.header());
    for frag in failure_fragments(limits, rows, kind) {
        out.push('\n');
        out.push_str(&frag);
    }
    out
}
