//! Storage key and path conventions.
//!
//! Pure string functions. These define where each instrument's draft lives
//! in a draft store and where its fillable template is expected by default.

use crate::models::instrument::InstrumentKind;

/// Draft store key for an instrument, e.g. `scat6-draft`.
pub fn draft(kind: InstrumentKind) -> String {
    format!("{}-draft", kind.id())
}

/// Default template location relative to the working directory,
/// e.g. `docs/SCAT6_Fillable.pdf`.
pub fn template(kind: InstrumentKind) -> String {
    format!("docs/{}_Fillable.pdf", kind.label())
}

pub const DRAFT_EXTENSION: &str = "json";
