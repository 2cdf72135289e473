//! Section visibility for the current session.
//!
//! Entitlement is decided elsewhere; this module only receives the
//! resulting `full_access` flag. Scoring never consults it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::instrument::InstrumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Demographics,
    History,
    Symptoms,
    Cognitive,
    Examination,
    Balance,
    Vestibular,
    MentalHealth,
    DelayedRecall,
    Management,
    Decision,
    Attestation,
}

impl Section {
    pub fn for_instrument(kind: InstrumentKind) -> &'static [Section] {
        match kind {
            InstrumentKind::Scat6 => &[
                Section::Demographics,
                Section::History,
                Section::Symptoms,
                Section::Cognitive,
                Section::Balance,
                Section::DelayedRecall,
                Section::Decision,
                Section::Attestation,
            ],
            InstrumentKind::Scoat6 => &[
                Section::Demographics,
                Section::History,
                Section::Symptoms,
                Section::Cognitive,
                Section::Examination,
                Section::Balance,
                Section::Vestibular,
                Section::MentalHealth,
                Section::DelayedRecall,
                Section::Management,
                Section::Decision,
                Section::Attestation,
            ],
        }
    }
}

/// Sections open to a session without full access.
const PREVIEW_SECTIONS: [Section; 3] = [Section::Demographics, Section::Symptoms, Section::Cognitive];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAccess {
    full_access: bool,
}

impl SectionAccess {
    pub fn new(full_access: bool) -> Self {
        Self { full_access }
    }

    pub fn has_full_access(&self) -> bool {
        self.full_access
    }

    /// Whether `section` of `kind` may be shown and edited.
    pub fn is_visible(&self, kind: InstrumentKind, section: Section) -> bool {
        if !Section::for_instrument(kind).contains(&section) {
            return false;
        }
        if self.full_access {
            return true;
        }
        kind == InstrumentKind::Scat6 && PREVIEW_SECTIONS.contains(&section)
    }

    pub fn visible_sections(&self, kind: InstrumentKind) -> Vec<Section> {
        Section::for_instrument(kind)
            .iter()
            .copied()
            .filter(|&s| self.is_visible(kind, s))
            .collect()
    }
}
