use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::form::{FieldError, PdfForm};
use crate::mapping::{FieldAction, FieldMap, Unresolved};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The source was missing, null or blank.
    NoValue,
    /// The template has no field with this name.
    MissingField,
    KindMismatch { expected: String, actual: String },
    NoSuchState { state: String },
    Unsupported { value: String },
    WriteFailed { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoValue => f.write_str("no value"),
            SkipReason::MissingField => f.write_str("field not in template"),
            SkipReason::KindMismatch { expected, actual } => {
                write!(f, "field is {actual}, binding needs {expected}")
            }
            SkipReason::NoSuchState { state } => write!(f, "no widget with state {state}"),
            SkipReason::Unsupported { value } => write!(f, "cannot write a JSON {value}"),
            SkipReason::WriteFailed { message } => write!(f, "write failed: {message}"),
        }
    }
}

impl From<FieldError> for SkipReason {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::Missing(_) => SkipReason::MissingField,
            FieldError::KindMismatch {
                expected, actual, ..
            } => SkipReason::KindMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            FieldError::NoSuchState { state, .. } => SkipReason::NoSuchState { state },
            FieldError::Write { message, .. } => SkipReason::WriteFailed { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedField {
    pub field: String,
    pub reason: SkipReason,
}

/// Outcome of a best-effort fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FillReport {
    pub filled: Vec<String>,
    pub skipped: Vec<SkippedField>,
}

impl FillReport {
    fn skip(&mut self, field: &str, reason: SkipReason) {
        tracing::debug!(field = %field, reason = %reason, "field skipped");
        self.skipped.push(SkippedField {
            field: field.to_string(),
            reason,
        });
    }

    /// Skips for reasons other than an empty source.
    pub fn problems(&self) -> impl Iterator<Item = &SkippedField> {
        self.skipped.iter().filter(|s| s.reason != SkipReason::NoValue)
    }
}

/// Apply every binding to `form`. Never fails: each binding either fills
/// its field or is recorded as skipped.
pub fn fill(form: &mut PdfForm, map: &FieldMap, view: &Value) -> FillReport {
    let report = map
        .bindings
        .iter()
        .fold(FillReport::default(), |mut report, binding| {
            let action = match binding.resolve(view) {
                Ok(action) => action,
                Err(Unresolved::NoValue) => {
                    report.skip(&binding.field, SkipReason::NoValue);
                    return report;
                }
                Err(Unresolved::Unsupported(value)) => {
                    report.skip(
                        &binding.field,
                        SkipReason::Unsupported {
                            value: value.to_string(),
                        },
                    );
                    return report;
                }
            };

            let written = match &action {
                FieldAction::Text(text) => form.set_text(&binding.field, text),
                FieldAction::Toggle(on) => form.set_toggle(&binding.field, *on),
                FieldAction::Choice(state) => form.set_choice(&binding.field, state),
            };
            match written {
                Ok(()) => report.filled.push(binding.field.clone()),
                Err(e) => report.skip(&binding.field, e.into()),
            }
            report
        });

    tracing::info!(
        filled = report.filled.len(),
        skipped = report.skipped.len(),
        problems = report.problems().count(),
        "form filled"
    );
    report
}
