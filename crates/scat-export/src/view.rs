use scat_core::models::symptoms::{Scoat6Symptom, SymptomItem, Timepoint};
use scat_core::{Assessment, Scat6Record, Scoat6Record};
use scat_instruments::banding::ScreenResult;
use scat_instruments::scoring::ScoreReport;
use scat_instruments::{Instrument, Scat6, Scat6Scores, Scoat6, Scoat6Scores};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::ExportError;

/// A record that can be rendered into a document.
pub trait ExportSource: Assessment {
    type Scores: Serialize;

    fn scores(&self) -> Self::Scores;

    fn score_report(&self, scores: &Self::Scores) -> ScoreReport;

    /// The record as field bindings see it under `/record`.
    fn record_view(&self) -> Result<Value, ExportError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Extra summary lines beyond the score table.
    fn summary_notes(&self, _scores: &Self::Scores) -> Vec<String> {
        Vec::new()
    }
}

/// `{ "record": ..., "scores": ... }`
pub fn export_view<R: ExportSource>(record: &R) -> Result<Value, ExportError> {
    Ok(json!({
        "record": record.record_view()?,
        "scores": serde_json::to_value(record.scores())?,
    }))
}

impl ExportSource for Scat6Record {
    type Scores = Scat6Scores;

    fn scores(&self) -> Scat6Scores {
        Scat6.score(self)
    }

    fn score_report(&self, scores: &Scat6Scores) -> ScoreReport {
        Scat6.report(&Scat6.score_entries(scores))
    }
}

impl ExportSource for Scoat6Record {
    type Scores = Scoat6Scores;

    fn scores(&self) -> Scoat6Scores {
        Scoat6.score(self)
    }

    fn score_report(&self, scores: &Scoat6Scores) -> ScoreReport {
        Scoat6.report(&Scoat6.score_entries(scores))
    }

    /// Unrated cells are written out as 0 so every table pointer resolves.
    fn record_view(&self) -> Result<Value, ExportError> {
        let mut view = serde_json::to_value(self)?;
        if let Some(symptoms) = view.get_mut("symptoms").and_then(Value::as_object_mut) {
            symptoms.insert("ratings".to_string(), serde_json::to_value(self.symptoms.dense())?);
        }
        Ok(view)
    }

    fn summary_notes(&self, scores: &Scoat6Scores) -> Vec<String> {
        let mut notes = Vec::new();
        for (name, result) in [
            ("GAD-7", &scores.gad7),
            ("PHQ-2", &scores.phq2),
            ("Sleep", &scores.sleep),
        ] {
            notes.push(screen_note(name, result));
        }
        for voms in &scores.voms {
            let line = match voms.max_increase {
                None => format!("{}: not tested", voms.maneuver.label()),
                Some(delta) if voms.provoked => {
                    format!("{}: provoked (+{delta})", voms.maneuver.label())
                }
                Some(delta) => format!("{}: {delta:+}", voms.maneuver.label()),
            };
            notes.push(line);
        }
        let latest = Timepoint::ALL
            .iter()
            .rev()
            .find(|tp| self.symptoms.column(**tp).any(|r| r > 0));
        if let Some(tp) = latest {
            let column = scores.symptoms_at(*tp);
            notes.push(format!(
                "Latest symptoms ({}): {} of {}, severity {}",
                tp.label(),
                column.number,
                Scoat6Symptom::ALL.len(),
                column.severity
            ));
        }
        notes
    }
}

fn screen_note(name: &str, result: &ScreenResult) -> String {
    match (result.score, &result.severity) {
        (Some(score), Some(severity)) => format!("{name}: {score} ({severity})"),
        (Some(score), None) => format!("{name}: {score}"),
        (None, _) => format!("{name}: not done"),
    }
}
