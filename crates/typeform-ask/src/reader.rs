//! The interactive input loop.
//!
//! [`ask_user`] repeatedly prompts for a line of text, coerces it to the
//! named answer type, and (optionally) runs the limit checker until an
//! accepted answer is produced. I/O is injected so the loop is testable
//! without a real console; each iteration blocks on one line of input,
//! with no timeout or cancellation.

use std::io::{BufRead, Write};

use typeform_check::{
    check_limits, format_failure_report, rows_from_satisfaction, CheckOutcome, ReportKind,
};
use typeform_core::{ComparatorRegistry, Limit, Value};

use crate::error::{AskError, CoerceError};
use crate::registry::TypeNameRegistry;

/// Asks `question` until the user supplies an answer that coerces to
/// the type named `answer_type` and, if `answer_limits` is given,
/// satisfies every limit.
///
/// Recovery rules per iteration:
/// - a [`CoerceError::Value`] (this text is unparsable) is explained to
///   the user and the loop retries;
/// - a [`CoerceError::Type`] (the coercion cannot handle text at all)
///   is fatal and propagates without retrying;
/// - an unsatisfied limit check prints the satisfaction report and
///   retries; a type-incompatible limit list propagates.
///
/// Limits are checked in verbose mode so retries can show the user
/// exactly which bounds failed.
pub fn ask_user<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    answer_type: &str,
    answer_limits: Option<&[Limit]>,
    types: &TypeNameRegistry,
    comparators: &ComparatorRegistry,
) -> Result<Value, AskError> {
    let coerce = types
        .resolve(answer_type)
        .ok_or_else(|| AskError::UnknownTypeName {
            name: answer_type.to_string(),
        })?;

    loop {
        write!(output, "|| {}\n>>> ", question)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AskError::InputClosed);
        }
        let answer_text = line.trim_end_matches(['\n', '\r']);

        let answer = match coerce(answer_text) {
            Ok(value) => value,
            Err(CoerceError::Type { message }) => {
                // The chosen answer type is unusable for text input;
                // asking again cannot help.
                return Err(AskError::CoercionType {
                    type_name: answer_type.to_string(),
                    message,
                });
            }
            Err(CoerceError::Value { message }) => {
                tracing::debug!(answer = answer_text, "answer rejected by coercion");
                writeln!(
                    output,
                    "Sorry, that answer isn't valid for type '{}': {}\nPlease try again.",
                    answer_type, message
                )?;
                continue;
            }
        };

        let limits = match answer_limits {
            Some(limits) => limits,
            None => return Ok(answer),
        };

        match check_limits(&answer, limits, comparators, true)? {
            CheckOutcome::Passed => return Ok(answer),
            CheckOutcome::Unsatisfied(matrix) => {
                tracing::debug!(answer = %answer, "answer rejected by limits");
                let rows = rows_from_satisfaction(&matrix);
                let report = format_failure_report(limits, &rows, ReportKind::Satisfaction);
                writeln!(output, "Limits failed!\n{}\nPlease try again.", report)?;
            }
        }
    }
}
