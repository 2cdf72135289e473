use scat_core::models::decision::DecisionColumn;
use scat_core::models::examination::Finding;
use scat_core::{InstrumentKind, Scat6Record};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ColumnScores, SymptomScores, maybe_count, subscale};
use crate::Instrument;
use crate::rules;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType};

/// SCAT6: Sport Concussion Assessment Tool, sixth edition.
/// Sideline and early-phase assessment, usable within 72 hours of injury.
pub struct Scat6;

/// Every derived SCAT6 score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scat6Scores {
    pub symptoms: SymptomScores,
    pub orientation: u32,
    pub immediate_memory: u32,
    pub concentration: u32,
    pub delayed_recall: u32,
    pub cognitive_total: u32,
    pub mbess_total: u32,
    pub foam_total: Option<u32>,
    pub tandem_gait_average: Option<f64>,
    pub tandem_gait_fastest: Option<f64>,
    pub dual_task_fastest: Option<f64>,
}

pub fn score(record: &Scat6Record) -> Scat6Scores {
    let orientation = rules::orientation_score(&record.orientation);
    let immediate_memory = rules::memory_score(&record.immediate_memory);
    let concentration = rules::concentration_score(&record.concentration);
    let delayed_recall = rules::delayed_recall_score(&record.delayed_recall);

    Scat6Scores {
        symptoms: SymptomScores::from_ratings(record.symptoms.ratings()),
        orientation,
        immediate_memory,
        concentration,
        delayed_recall,
        cognitive_total: orientation + immediate_memory + concentration + delayed_recall,
        mbess_total: rules::stance_total(&record.mbess.firm),
        foam_total: rules::foam_total(record.mbess.foam.as_ref()),
        tandem_gait_average: rules::gait_average(&record.tandem_gait),
        tandem_gait_fastest: rules::gait_fastest(&record.tandem_gait),
        dual_task_fastest: rules::dual_task_fastest(&record.dual_task),
    }
}

/// Capture the current scores as a dated tracking-table column.
pub fn decision_column(
    scores: &Scat6Scores,
    date: &str,
    neurological_exam: Option<Finding>,
) -> DecisionColumn {
    ColumnScores {
        symptoms: scores.symptoms,
        orientation: Some(scores.orientation),
        immediate_memory: scores.immediate_memory,
        concentration: scores.concentration,
        delayed_recall: scores.delayed_recall,
        cognitive_total: scores.cognitive_total,
        mbess_total: scores.mbess_total,
        tandem_gait_fastest: scores.tandem_gait_fastest,
        dual_task_fastest: scores.dual_task_fastest,
    }
    .into_column(date, neurological_exam)
}

impl Instrument for Scat6 {
    type Record = Scat6Record;
    type Scores = Scat6Scores;

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Scat6
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let seconds = ScoreRange::positive_seconds();
            vec![
                Domain {
                    id: "symptoms".to_string(),
                    name: "Symptom Evaluation".to_string(),
                    subscales: vec![
                        subscale("symptom_number", "Symptom Number", ScoreType::Count, ScoreRange::whole(0.0, 22.0)),
                        subscale("symptom_severity", "Symptom Severity", ScoreType::Sum, ScoreRange::whole(0.0, 132.0)),
                    ],
                    description: Some("22 symptoms rated 0–6".to_string()),
                },
                Domain {
                    id: "cognitive".to_string(),
                    name: "Cognitive Screening".to_string(),
                    subscales: vec![
                        subscale("orientation", "Orientation", ScoreType::Count, ScoreRange::whole(0.0, 5.0)),
                        subscale("immediate_memory", "Immediate Memory", ScoreType::Count, ScoreRange::whole(0.0, 30.0)),
                        subscale("concentration", "Concentration", ScoreType::Count, ScoreRange::whole(0.0, 5.0)),
                        subscale("delayed_recall", "Delayed Recall", ScoreType::Count, ScoreRange::whole(0.0, 10.0)),
                        subscale("cognitive_total", "Total Cognitive Score", ScoreType::Sum, ScoreRange::whole(0.0, 50.0)),
                    ],
                    description: None,
                },
                Domain {
                    id: "balance".to_string(),
                    name: "Coordination and Balance".to_string(),
                    subscales: vec![
                        subscale("mbess_total", "mBESS Total Errors", ScoreType::Errors, ScoreRange::whole(0.0, 30.0)),
                        subscale("foam_total", "mBESS Foam Errors", ScoreType::Errors, ScoreRange::whole(0.0, 30.0)),
                        subscale("tandem_gait_average", "Tandem Gait Average", ScoreType::Seconds, seconds),
                        subscale("tandem_gait_fastest", "Tandem Gait Fastest", ScoreType::Seconds, seconds),
                        subscale("dual_task_fastest", "Dual Task Gait Fastest", ScoreType::Seconds, seconds),
                    ],
                    description: Some("Lower error counts and times are better".to_string()),
                },
            ]
        });
        &DOMAINS
    }

    fn score(&self, record: &Scat6Record) -> Scat6Scores {
        score(record)
    }

    fn score_entries(&self, scores: &Scat6Scores) -> Vec<ScoreEntry> {
        vec![
            ScoreEntry::count("symptom_number", scores.symptoms.number),
            ScoreEntry::count("symptom_severity", scores.symptoms.severity),
            ScoreEntry::count("orientation", scores.orientation),
            ScoreEntry::count("immediate_memory", scores.immediate_memory),
            ScoreEntry::count("concentration", scores.concentration),
            ScoreEntry::count("delayed_recall", scores.delayed_recall),
            ScoreEntry::count("cognitive_total", scores.cognitive_total),
            ScoreEntry::count("mbess_total", scores.mbess_total),
            maybe_count("foam_total", scores.foam_total),
            ScoreEntry::new("tandem_gait_average", scores.tandem_gait_average),
            ScoreEntry::new("tandem_gait_fastest", scores.tandem_gait_fastest),
            ScoreEntry::new("dual_task_fastest", scores.dual_task_fastest),
        ]
    }
}
