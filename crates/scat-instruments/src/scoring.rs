use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of value a derived score holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Number of items meeting a condition.
    Count,
    /// Sum of item ratings.
    Sum,
    /// Total errors committed.
    Errors,
    /// Elapsed seconds.
    Seconds,
    /// Proportion between 0 and 1.
    Ratio,
    /// Change relative to a baseline (may be negative).
    Delta,
}

/// Defines the valid range for a score. An absent `max` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn whole(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            step: Some(1.0),
        }
    }

    pub const fn positive_seconds() -> Self {
        Self {
            min: 0.0,
            max: None,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || self.max.is_some_and(|max| value > max) {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A derived score an instrument produces.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// A group of related derived scores (symptoms, cognition, balance, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub description: Option<String>,
}

/// One computed score. `None` means "no value", which is not the same as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: Option<f64>,
}

impl ScoreEntry {
    pub fn new(subscale_id: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            subscale_id: subscale_id.into(),
            value,
        }
    }

    pub fn count(subscale_id: impl Into<String>, value: u32) -> Self {
        Self::new(subscale_id, Some(f64::from(value)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}

/// Scores paired with their descriptors, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub instrument: String,
    pub domains: Vec<DomainReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainReport {
    pub id: String,
    pub name: String,
    pub scores: Vec<ScoreLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLine {
    pub id: String,
    pub name: String,
    pub value: Option<f64>,
    pub max: Option<f64>,
}
