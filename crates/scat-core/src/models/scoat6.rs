use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::balance::{
    ComplexTandemGait, DualTaskCognitive, DualTaskGait, Mbess, TandemGait,
};
use crate::models::cognitive::{Concentration, DelayedRecall, ImmediateMemory};
use crate::models::decision::DecisionTable;
use crate::models::demographics::{Attestation, ConcussionDiagnosis, Demographics};
use crate::models::examination::{CervicalExam, NeuroExam, Orthostatics, Voms};
use crate::models::instrument::{Assessment, InstrumentKind};
use crate::models::screens::LikertScreen;
use crate::models::symptoms::{SymptomReport, SymptomTable};
use crate::reference::WordListKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RemovalFromPlay {
    Immediate,
    WalkedOff,
    ContinuedToPlay,
    AssistedOff,
    StretcheredOff,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CurrentInjury {
    pub removal_from_play: Option<RemovalFromPlay>,
    pub continued_to_play_minutes: String,
    pub date_of_injury: String,
    pub description: String,
    pub date_symptoms_first_appeared: String,
    pub date_symptoms_first_reported: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct HeadInjury {
    pub date: String,
    pub description: String,
    pub management: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Disorder {
    Migraine,
    ChronicHeadache,
    Depression,
    Anxiety,
    Syncope,
    Epilepsy,
    Adhd,
    LearningDisorder,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DisorderHistory {
    pub present: bool,
    /// Only used for [`Disorder::Other`].
    pub name: String,
    pub year_diagnosed: String,
    pub management: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Medication {
    pub item: String,
    pub dose: String,
    pub frequency: String,
    pub reason_taken: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FamilyHistory {
    pub family_member: String,
    pub depression: bool,
    pub anxiety: bool,
    pub adhd: bool,
    pub learning_disorder: bool,
    pub migraine: bool,
    pub other: String,
    pub management: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Specialist {
    AthleticTrainer,
    ExercisePhysiologist,
    Neurologist,
    Neuropsychologist,
    Neurosurgeon,
    Ophthalmologist,
    Optometrist,
    Paediatrician,
    Physiatrist,
    Physiotherapist,
    Psychologist,
    Psychiatrist,
    SportMedicine,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Referral {
    pub referred: bool,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ComputerizedTesting {
    pub not_done: bool,
    pub battery: String,
    pub baseline_date: String,
    pub post_injury_rest: String,
    pub post_injury_exercise: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Management {
    pub overall_assessment: String,
    pub aerobic_exercise_not_done: bool,
    pub aerobic_exercise_protocol: String,
    pub imaging_requested: bool,
    pub imaging_type: String,
    pub imaging_reason: String,
    pub imaging_findings: String,
    pub return_to_class: String,
    pub return_to_work: String,
    pub return_to_driving: String,
    pub return_to_sport: String,
    pub referrals: BTreeMap<Specialist, Referral>,
    pub pharmacotherapy: String,
    pub date_of_review: String,
    pub date_of_follow_up: String,
}

/// One SCOAT6 session across up to five symptom timepoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Scoat6Record {
    pub demographics: Demographics,
    pub age: String,
    pub clinician: String,
    pub current_injury: CurrentInjury,
    pub head_injuries: Vec<HeadInjury>,
    pub disorders: BTreeMap<Disorder, DisorderHistory>,
    pub medications: Vec<Medication>,
    pub family_history: Vec<FamilyHistory>,
    pub family_history_notes: String,

    pub symptoms: SymptomTable,
    pub symptom_report: SymptomReport,

    pub immediate_memory: ImmediateMemory,
    /// Total from the alternate 15-word list when that list was used.
    pub alternate_15_word_total: Option<u8>,
    pub concentration: Concentration,

    pub orthostatics: Orthostatics,
    pub cervical: CervicalExam,
    pub neurological: NeuroExam,

    pub mbess: Mbess,
    pub tandem_gait: TandemGait,
    pub complex_tandem_gait: ComplexTandemGait,
    pub dual_task: DualTaskGait,
    pub dual_task_cognitive: DualTaskCognitive,

    pub voms: Voms,

    pub gad7: LikertScreen,
    pub phq2: LikertScreen,
    pub sleep: LikertScreen,

    pub delayed_recall: DelayedRecall,
    pub delayed_recall_minutes_since_immediate: String,

    pub computerized_testing: ComputerizedTesting,
    pub management: Management,

    pub decisions: DecisionTable,
    pub diagnosis: Option<ConcussionDiagnosis>,
    pub attestation: Attestation,
    pub clinical_notes: String,
}

impl Default for Scoat6Record {
    fn default() -> Self {
        Self {
            demographics: Demographics::default(),
            age: String::new(),
            clinician: String::new(),
            current_injury: CurrentInjury::default(),
            head_injuries: vec![HeadInjury::default(); 3],
            disorders: BTreeMap::new(),
            medications: vec![Medication::default(); 5],
            family_history: vec![FamilyHistory::default(); 3],
            family_history_notes: String::new(),
            symptoms: SymptomTable::default(),
            symptom_report: SymptomReport::default(),
            immediate_memory: ImmediateMemory::default(),
            alternate_15_word_total: None,
            concentration: Concentration::default(),
            orthostatics: Orthostatics::default(),
            cervical: CervicalExam::default(),
            neurological: NeuroExam::default(),
            mbess: Mbess::default(),
            tandem_gait: TandemGait::default(),
            complex_tandem_gait: ComplexTandemGait::default(),
            dual_task: DualTaskGait::default(),
            dual_task_cognitive: DualTaskCognitive::default(),
            voms: Voms::default(),
            gad7: LikertScreen::gad7(),
            phq2: LikertScreen::phq2(),
            sleep: LikertScreen::sleep(),
            delayed_recall: DelayedRecall::default(),
            delayed_recall_minutes_since_immediate: String::new(),
            computerized_testing: ComputerizedTesting::default(),
            management: Management::default(),
            decisions: DecisionTable::default(),
            diagnosis: None,
            attestation: Attestation::default(),
            clinical_notes: String::new(),
        }
    }
}

impl Scoat6Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the immediate-memory list; delayed recall is resized with it.
    pub fn select_word_list(&mut self, key: WordListKey) {
        if self.immediate_memory.word_list != Some(key) {
            self.delayed_recall.recalled = vec![false; key.words().len()];
        }
        self.immediate_memory.select_word_list(key);
    }

    pub fn delayed_recall_available(&self) -> bool {
        self.immediate_memory.word_list_selected()
    }
}

impl Assessment for Scoat6Record {
    const KIND: InstrumentKind = InstrumentKind::Scoat6;

    fn demographics(&self) -> &Demographics {
        &self.demographics
    }
}
