use std::collections::BTreeMap;

use scat_core::models::decision::DecisionColumn;
use scat_core::models::examination::{Finding, VomsManeuverKind};
use scat_core::models::symptoms::{SymptomItem, Scoat6Symptom, Timepoint};
use scat_core::{InstrumentKind, Scoat6Record};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ColumnScores, SymptomScores, maybe_count, subscale};
use crate::Instrument;
use crate::banding::{GAD7, PHQ2, SLEEP, ScreenResult, SeverityScale, screen_result};
use crate::rules::{self, VomsResult};
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType};

/// SCOAT6: Sport Concussion Office Assessment Tool, sixth edition.
/// Office follow-up from 72 hours onwards, with symptoms tracked across
/// five timepoints.
pub struct Scoat6;

/// Every derived SCOAT6 score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scoat6Scores {
    /// One entry per timepoint, all five always present.
    pub symptoms: BTreeMap<Timepoint, SymptomScores>,
    pub immediate_memory: u32,
    pub concentration: u32,
    pub delayed_recall: u32,
    pub cognitive_total: u32,
    pub mbess_total: u32,
    pub foam_total: Option<u32>,
    pub tandem_gait_average: Option<f64>,
    pub tandem_gait_fastest: Option<f64>,
    pub dual_task_fastest: Option<f64>,
    pub complex_tandem_forward: u32,
    pub complex_tandem_backward: u32,
    pub complex_tandem_total: u32,
    pub dual_task_accuracy: Option<f64>,
    pub voms: Vec<VomsResult>,
    pub gad7: ScreenResult,
    pub phq2: ScreenResult,
    pub sleep: ScreenResult,
}

impl Scoat6Scores {
    pub fn symptoms_at(&self, timepoint: Timepoint) -> SymptomScores {
        self.symptoms.get(&timepoint).copied().unwrap_or_default()
    }
}

pub fn score(record: &Scoat6Record) -> Scoat6Scores {
    let symptoms = Timepoint::ALL
        .iter()
        .map(|&tp| (tp, SymptomScores::from_ratings(record.symptoms.column(tp))))
        .collect();

    let immediate_memory = rules::memory_score(&record.immediate_memory);
    let concentration = rules::concentration_score(&record.concentration);
    let delayed_recall = rules::delayed_recall_score(&record.delayed_recall);

    Scoat6Scores {
        symptoms,
        immediate_memory,
        concentration,
        delayed_recall,
        cognitive_total: immediate_memory + concentration + delayed_recall,
        mbess_total: rules::stance_total(&record.mbess.firm),
        foam_total: rules::foam_total(record.mbess.foam.as_ref()),
        tandem_gait_average: rules::gait_average(&record.tandem_gait),
        tandem_gait_fastest: rules::gait_fastest(&record.tandem_gait),
        dual_task_fastest: rules::dual_task_fastest(&record.dual_task),
        complex_tandem_forward: rules::complex_tandem_forward(&record.complex_tandem_gait),
        complex_tandem_backward: rules::complex_tandem_backward(&record.complex_tandem_gait),
        complex_tandem_total: rules::complex_tandem_total(&record.complex_tandem_gait),
        dual_task_accuracy: rules::dual_task_accuracy(&record.dual_task_cognitive),
        voms: VomsManeuverKind::ALL
            .iter()
            .map(|&kind| rules::voms_provocation(&record.voms, kind))
            .collect(),
        gad7: screen_result(&record.gad7, &GAD7),
        phq2: screen_result(&record.phq2, &PHQ2),
        sleep: screen_result(&record.sleep, &SLEEP),
    }
}

/// Capture the scores at `timepoint` as a dated tracking-table column.
/// SCOAT6 has no orientation block, so that row stays empty.
pub fn decision_column(
    scores: &Scoat6Scores,
    timepoint: Timepoint,
    date: &str,
    neurological_exam: Option<Finding>,
) -> DecisionColumn {
    ColumnScores {
        symptoms: scores.symptoms_at(timepoint),
        orientation: None,
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

fn screen_subscale(scale: &SeverityScale) -> crate::scoring::Subscale {
    subscale(
        scale.id,
        scale.name,
        ScoreType::Sum,
        ScoreRange::whole(0.0, f64::from(scale.max_score())),
    )
}

impl Instrument for Scoat6 {
    type Record = Scoat6Record;
    type Scores = Scoat6Scores;

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Scoat6
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let items = Scoat6Symptom::ALL.len() as f64;
            let seconds = ScoreRange::positive_seconds();
            let increase = ScoreRange {
                min: -10.0,
                max: Some(10.0),
                step: Some(1.0),
            };

            let symptom_subscales = Timepoint::ALL
                .iter()
                .flat_map(|tp| {
                    [
                        subscale(
                            &format!("symptom_number_{}", tp.id()),
                            &format!("Symptom Number ({})", tp.label()),
                            ScoreType::Count,
                            ScoreRange::whole(0.0, items),
                        ),
                        subscale(
                            &format!("symptom_severity_{}", tp.id()),
                            &format!("Symptom Severity ({})", tp.label()),
                            ScoreType::Sum,
                            ScoreRange::whole(0.0, items * 6.0),
                        ),
                    ]
                })
                .collect();

            let voms_subscales = VomsManeuverKind::ALL
                .iter()
                .map(|kind| {
                    subscale(
                        &format!("voms_{}", kind.id()),
                        &format!("{} Symptom Change", kind.label()),
                        ScoreType::Delta,
                        increase,
                    )
                })
                .collect();

            vec![
                Domain {
                    id: "symptoms".to_string(),
                    name: "Symptom Evaluation".to_string(),
                    subscales: symptom_subscales,
                    description: Some("24 symptoms rated 0–6 at each timepoint".to_string()),
                },
                Domain {
                    id: "cognitive".to_string(),
                    name: "Cognitive Screening".to_string(),
                    subscales: vec![
                        subscale("immediate_memory", "Immediate Memory", ScoreType::Count, ScoreRange::whole(0.0, 30.0)),
                        subscale("concentration", "Concentration", ScoreType::Count, ScoreRange::whole(0.0, 5.0)),
                        subscale("delayed_recall", "Delayed Recall", ScoreType::Count, ScoreRange::whole(0.0, 10.0)),
                        subscale("cognitive_total", "Total Cognitive Score", ScoreType::Sum, ScoreRange::whole(0.0, 45.0)),
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
                        subscale("complex_tandem_forward", "Complex Tandem Gait Forward", ScoreType::Count, ScoreRange::whole(0.0, 10.0)),
                        subscale("complex_tandem_backward", "Complex Tandem Gait Backward", ScoreType::Count, ScoreRange::whole(0.0, 10.0)),
                        subscale("complex_tandem_total", "Complex Tandem Gait Total", ScoreType::Count, ScoreRange::whole(0.0, 20.0)),
                        subscale(
                            "dual_task_accuracy",
                            "Dual Task Cognitive Accuracy",
                            ScoreType::Ratio,
                            ScoreRange {
                                min: 0.0,
                                max: Some(1.0),
                                step: None,
                            },
                        ),
                    ],
                    description: Some("Lower error counts and times are better".to_string()),
                },
                Domain {
                    id: "vestibular".to_string(),
                    name: "Modified VOMS".to_string(),
                    subscales: voms_subscales,
                    description: Some("Largest symptom change over baseline".to_string()),
                },
                Domain {
                    id: "screens".to_string(),
                    name: "Psychological and Sleep Screening".to_string(),
                    subscales: vec![
                        screen_subscale(&GAD7),
                        screen_subscale(&PHQ2),
                        screen_subscale(&SLEEP),
                    ],
                    description: None,
                },
            ]
        });
        &DOMAINS
    }

    fn score(&self, record: &Scoat6Record) -> Scoat6Scores {
        score(record)
    }

    fn score_entries(&self, scores: &Scoat6Scores) -> Vec<ScoreEntry> {
        let mut entries = Vec::new();
        for &tp in Timepoint::ALL.iter() {
            let column = scores.symptoms_at(tp);
            entries.push(ScoreEntry::count(format!("symptom_number_{}", tp.id()), column.number));
            entries.push(ScoreEntry::count(format!("symptom_severity_{}", tp.id()), column.severity));
        }
        entries.extend([
            ScoreEntry::count("immediate_memory", scores.immediate_memory),
            ScoreEntry::count("concentration", scores.concentration),
            ScoreEntry::count("delayed_recall", scores.delayed_recall),
            ScoreEntry::count("cognitive_total", scores.cognitive_total),
            ScoreEntry::count("mbess_total", scores.mbess_total),
            maybe_count("foam_total", scores.foam_total),
            ScoreEntry::new("tandem_gait_average", scores.tandem_gait_average),
            ScoreEntry::new("tandem_gait_fastest", scores.tandem_gait_fastest),
            ScoreEntry::new("dual_task_fastest", scores.dual_task_fastest),
            ScoreEntry::count("complex_tandem_forward", scores.complex_tandem_forward),
            ScoreEntry::count("complex_tandem_backward", scores.complex_tandem_backward),
            ScoreEntry::count("complex_tandem_total", scores.complex_tandem_total),
            ScoreEntry::new("dual_task_accuracy", scores.dual_task_accuracy),
        ]);
        entries.extend(scores.voms.iter().map(|v| {
            ScoreEntry::new(
                format!("voms_{}", v.maneuver.id()),
                v.max_increase.map(f64::from),
            )
        }));
        entries.extend([
            maybe_count(GAD7.id, scores.gad7.score),
            maybe_count(PHQ2.id, scores.phq2.score),
            maybe_count(SLEEP.id, scores.sleep.score),
        ]);
        entries
    }
}
