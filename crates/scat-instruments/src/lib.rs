//! scat-instruments
//!
//! Scoring for the SCAT6 and SCOAT6 concussion assessments. Pure functions
//! over `scat-core` records; nothing here performs I/O or returns an error
//! while scoring.

pub mod banding;
pub mod error;
pub mod instruments;
pub mod rules;
pub mod scoring;

use scat_core::InstrumentKind;
use serde::Serialize;

use error::InstrumentError;
use scoring::{Domain, DomainReport, ScoreEntry, ScoreLine, ScoreReport, Subscale, ValidationError};

pub use instruments::scat6::{Scat6, Scat6Scores};
pub use instruments::scoat6::{Scoat6, Scoat6Scores};

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// The raw record this instrument scores.
    type Record;

    /// Every derived value for one record.
    type Scores: Serialize;

    fn kind(&self) -> InstrumentKind;

    /// Human-readable name (e.g., "SCAT6").
    fn name(&self) -> &str {
        self.kind().label()
    }

    /// The domains and derived scores this instrument produces.
    fn domains(&self) -> &[Domain];

    /// Derive all scores from a record. Total: never fails on any record
    /// that deserialized.
    fn score(&self, record: &Self::Record) -> Self::Scores;

    /// Flatten scores into entries keyed by subscale id, in domain order.
    fn score_entries(&self, scores: &Self::Scores) -> Vec<ScoreEntry>;

    fn subscales(&self) -> impl Iterator<Item = &Subscale> {
        self.domains().iter().flat_map(|d| &d.subscales)
    }

    fn subscale(&self, id: &str) -> Result<&Subscale, InstrumentError> {
        self.subscales()
            .find(|s| s.id == id)
            .ok_or_else(|| InstrumentError::UnknownSubscale {
                instrument: self.name().to_string(),
                subscale_id: id.to_string(),
            })
    }

    /// Validate a set of score entries against this instrument's ranges.
    /// Entries without a value are not checked.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            let Some(value) = entry.value else {
                continue;
            };
            if let Some(subscale) = self.subscales().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(value)
            {
                let max = subscale
                    .range
                    .max
                    .map_or_else(|| "∞".to_string(), |m| m.to_string());
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        value,
                        subscale.range.min,
                        max,
                    ),
                });
            }
        }
        errors
    }

    /// Like `validate_scores`, but also rejects unknown subscales and stops
    /// at the first problem.
    fn check(&self, scores: &[ScoreEntry]) -> Result<(), InstrumentError> {
        for entry in scores {
            self.subscale(&entry.subscale_id)?;
        }
        match self.validate_scores(scores).into_iter().next() {
            Some(source) => Err(InstrumentError::OutOfRange {
                instrument: self.name().to_string(),
                source,
            }),
            None => Ok(()),
        }
    }

    /// Pair entries with their descriptors for display. Subscales with no
    /// entry are listed with no value.
    fn report(&self, scores: &[ScoreEntry]) -> ScoreReport {
        let domains = self
            .domains()
            .iter()
            .map(|domain| DomainReport {
                id: domain.id.clone(),
                name: domain.name.clone(),
                scores: domain
                    .subscales
                    .iter()
                    .map(|subscale| ScoreLine {
                        id: subscale.id.clone(),
                        name: subscale.name.clone(),
                        value: scores
                            .iter()
                            .find(|e| e.subscale_id == subscale.id)
                            .and_then(|e| e.value),
                        max: subscale.range.max,
                    })
                    .collect(),
            })
            .collect();
        ScoreReport {
            instrument: self.name().to_string(),
            domains,
        }
    }
}
