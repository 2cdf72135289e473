use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::balance::{DualTaskGait, Mbess, TandemGait};
use crate::models::cognitive::{Concentration, DelayedRecall, ImmediateMemory, Orientation};
use crate::models::decision::DecisionTable;
use crate::models::demographics::{Attestation, ConcussionDiagnosis, Demographics};
use crate::models::instrument::{Assessment, InstrumentKind};
use crate::models::symptoms::{SymptomChecklist, SymptomReport};
use crate::reference::WordListKey;

/// Prior concussions and background conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ConcussionHistory {
    pub previous_concussions: String,
    pub most_recent_concussion: String,
    pub primary_symptoms: String,
    pub recovery_time: String,
    pub hospitalized_for_head_injury: bool,
    pub headache_disorder: bool,
    pub learning_disability: bool,
    pub adhd: bool,
    pub psychological_disorder: bool,
    pub background_notes: String,
    pub current_medications: String,
}

/// One SCAT6 session: every raw input, no derived values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Scat6Record {
    pub demographics: Demographics,
    pub examiner: String,
    pub current_year: String,
    pub date_of_injury: String,
    pub time_of_injury: String,
    pub history: ConcussionHistory,

    pub symptoms: SymptomChecklist,
    pub symptom_report: SymptomReport,

    pub orientation: Orientation,
    pub immediate_memory: ImmediateMemory,
    pub concentration: Concentration,

    pub mbess: Mbess,
    pub tandem_gait: TandemGait,
    pub dual_task: DualTaskGait,

    pub delayed_recall: DelayedRecall,

    pub different_from_usual: Option<bool>,
    pub different_from_usual_description: String,

    pub decisions: DecisionTable,
    pub diagnosis: Option<ConcussionDiagnosis>,
    pub attestation: Attestation,
    pub clinical_notes: String,
}

impl Scat6Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the immediate-memory list. Delayed recall follows the same
    /// list, so its vector is resized with the trials.
    pub fn select_word_list(&mut self, key: WordListKey) {
        if self.immediate_memory.word_list != Some(key) {
            self.delayed_recall.recalled = vec![false; key.words().len()];
        }
        self.immediate_memory.select_word_list(key);
    }

    /// Delayed recall is only meaningful once a list has been chosen.
    pub fn delayed_recall_available(&self) -> bool {
        self.immediate_memory.word_list_selected()
    }
}

impl Assessment for Scat6Record {
    const KIND: InstrumentKind = InstrumentKind::Scat6;

    fn demographics(&self) -> &Demographics {
        &self.demographics
    }
}
