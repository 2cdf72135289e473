pub mod scat6;
pub mod scoat6;

use scat_core::models::decision::DecisionColumn;
use scat_core::models::examination::Finding;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rules;
use crate::scoring::{ScoreEntry, ScoreRange, ScoreType, Subscale};

/// Symptom number and severity for one column of ratings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomScores {
    pub number: u32,
    pub severity: u32,
}

impl SymptomScores {
    pub fn from_ratings<I: IntoIterator<Item = u8>>(ratings: I) -> Self {
        let ratings: Vec<u8> = ratings.into_iter().collect();
        Self {
            number: rules::symptom_count(ratings.iter().copied()),
            severity: rules::symptom_severity(ratings),
        }
    }
}

/// The scores every instrument copies into a tracking-table column.
pub(crate) struct ColumnScores {
    pub symptoms: SymptomScores,
    pub orientation: Option<u32>,
    pub immediate_memory: u32,
    pub concentration: u32,
    pub delayed_recall: u32,
    pub cognitive_total: u32,
    pub mbess_total: u32,
    pub tandem_gait_fastest: Option<f64>,
    pub dual_task_fastest: Option<f64>,
}

impl ColumnScores {
    pub fn into_column(self, date: &str, neurological_exam: Option<Finding>) -> DecisionColumn {
        DecisionColumn {
            date: date.to_string(),
            neurological_exam,
            symptom_number: self.symptoms.number,
            symptom_severity: self.symptoms.severity,
            orientation: self.orientation,
            immediate_memory: self.immediate_memory,
            concentration: self.concentration,
            delayed_recall: self.delayed_recall,
            cognitive_total: self.cognitive_total,
            mbess_total: self.mbess_total,
            tandem_gait_fastest: self.tandem_gait_fastest,
            dual_task_fastest: self.dual_task_fastest,
        }
    }
}

pub(crate) fn subscale(id: &str, name: &str, score_type: ScoreType, range: ScoreRange) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type,
        range,
        description: None,
    }
}

pub(crate) fn maybe_count(id: &str, value: Option<u32>) -> ScoreEntry {
    ScoreEntry::new(id, value.map(f64::from))
}
