//! Symptom evaluation blocks.
//!
//! SCAT6 rates each symptom once. SCOAT6 rates each symptom at up to five
//! timepoints and is stored as a sparse table keyed by (item, timepoint);
//! a cell that was never written reads as 0.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Highest severity on the 0–6 symptom scale.
pub const MAX_SEVERITY: u8 = 6;

/// A fixed, ordered symptom vocabulary.
pub trait SymptomItem: Copy + Ord + 'static {
    /// Every item in form order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scat6Symptom {
    Headache,
    PressureInHead,
    NeckPain,
    NauseaOrVomiting,
    Dizziness,
    BlurredVision,
    BalanceProblems,
    SensitivityToLight,
    SensitivityToNoise,
    FeelingSlowedDown,
    FeelingLikeInAFog,
    DontFeelRight,
    DifficultyConcentrating,
    DifficultyRemembering,
    FatigueOrLowEnergy,
    Confusion,
    Drowsiness,
    MoreEmotional,
    Irritability,
    Sadness,
    NervousOrAnxious,
    TroubleFallingAsleep,
}

impl SymptomItem for Scat6Symptom {
    const ALL: &'static [Self] = &[
        Scat6Symptom::Headache,
        Scat6Symptom::PressureInHead,
        Scat6Symptom::NeckPain,
        Scat6Symptom::NauseaOrVomiting,
        Scat6Symptom::Dizziness,
        Scat6Symptom::BlurredVision,
        Scat6Symptom::BalanceProblems,
        Scat6Symptom::SensitivityToLight,
        Scat6Symptom::SensitivityToNoise,
        Scat6Symptom::FeelingSlowedDown,
        Scat6Symptom::FeelingLikeInAFog,
        Scat6Symptom::DontFeelRight,
        Scat6Symptom::DifficultyConcentrating,
        Scat6Symptom::DifficultyRemembering,
        Scat6Symptom::FatigueOrLowEnergy,
        Scat6Symptom::Confusion,
        Scat6Symptom::Drowsiness,
        Scat6Symptom::MoreEmotional,
        Scat6Symptom::Irritability,
        Scat6Symptom::Sadness,
        Scat6Symptom::NervousOrAnxious,
        Scat6Symptom::TroubleFallingAsleep,
    ];

    fn label(self) -> &'static str {
        match self {
            Scat6Symptom::Headache => "Headache",
            Scat6Symptom::PressureInHead => "Pressure in head",
            Scat6Symptom::NeckPain => "Neck pain",
            Scat6Symptom::NauseaOrVomiting => "Nausea or vomiting",
            Scat6Symptom::Dizziness => "Dizziness",
            Scat6Symptom::BlurredVision => "Blurred vision",
            Scat6Symptom::BalanceProblems => "Balance problems",
            Scat6Symptom::SensitivityToLight => "Sensitivity to light",
            Scat6Symptom::SensitivityToNoise => "Sensitivity to noise",
            Scat6Symptom::FeelingSlowedDown => "Feeling slowed down",
            Scat6Symptom::FeelingLikeInAFog => "Feeling like \"in a fog\"",
            Scat6Symptom::DontFeelRight => "\"Don't feel right\"",
            Scat6Symptom::DifficultyConcentrating => "Difficulty concentrating",
            Scat6Symptom::DifficultyRemembering => "Difficulty remembering",
            Scat6Symptom::FatigueOrLowEnergy => "Fatigue or low energy",
            Scat6Symptom::Confusion => "Confusion",
            Scat6Symptom::Drowsiness => "Drowsiness",
            Scat6Symptom::MoreEmotional => "More emotional",
            Scat6Symptom::Irritability => "Irritability",
            Scat6Symptom::Sadness => "Sadness",
            Scat6Symptom::NervousOrAnxious => "Nervous or anxious",
            Scat6Symptom::TroubleFallingAsleep => "Trouble falling asleep",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scoat6Symptom {
    Headache,
    PressureInHead,
    NeckPain,
    NauseaOrVomiting,
    Dizziness,
    BlurredVision,
    BalanceProblems,
    SensitivityToLight,
    SensitivityToNoise,
    FeelingSlowedDown,
    FeelingLikeInAFog,
    DifficultyConcentrating,
    DifficultyRemembering,
    FatigueOrLowEnergy,
    Confusion,
    Drowsiness,
    MoreEmotional,
    Irritability,
    Sadness,
    NervousOrAnxious,
    SleepDisturbance,
    AbnormalHeartRate,
    ExcessiveSweating,
    /// Free-text item; its name lives in [`SymptomTable::other_name`].
    Other,
}

impl SymptomItem for Scoat6Symptom {
    const ALL: &'static [Self] = &[
        Scoat6Symptom::Headache,
        Scoat6Symptom::PressureInHead,
        Scoat6Symptom::NeckPain,
        Scoat6Symptom::NauseaOrVomiting,
        Scoat6Symptom::Dizziness,
        Scoat6Symptom::BlurredVision,
        Scoat6Symptom::BalanceProblems,
        Scoat6Symptom::SensitivityToLight,
        Scoat6Symptom::SensitivityToNoise,
        Scoat6Symptom::FeelingSlowedDown,
        Scoat6Symptom::FeelingLikeInAFog,
        Scoat6Symptom::DifficultyConcentrating,
        Scoat6Symptom::DifficultyRemembering,
        Scoat6Symptom::FatigueOrLowEnergy,
        Scoat6Symptom::Confusion,
        Scoat6Symptom::Drowsiness,
        Scoat6Symptom::MoreEmotional,
        Scoat6Symptom::Irritability,
        Scoat6Symptom::Sadness,
        Scoat6Symptom::NervousOrAnxious,
        Scoat6Symptom::SleepDisturbance,
        Scoat6Symptom::AbnormalHeartRate,
        Scoat6Symptom::ExcessiveSweating,
        Scoat6Symptom::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Scoat6Symptom::Headache => "Headache",
            Scoat6Symptom::PressureInHead => "Pressure in head",
            Scoat6Symptom::NeckPain => "Neck pain",
            Scoat6Symptom::NauseaOrVomiting => "Nausea or vomiting",
            Scoat6Symptom::Dizziness => "Dizziness",
            Scoat6Symptom::BlurredVision => "Blurred vision",
            Scoat6Symptom::BalanceProblems => "Balance problems",
            Scoat6Symptom::SensitivityToLight => "Sensitivity to light",
            Scoat6Symptom::SensitivityToNoise => "Sensitivity to noise",
            Scoat6Symptom::FeelingSlowedDown => "Feeling slowed down",
            Scoat6Symptom::FeelingLikeInAFog => "Feeling like \"in a fog\"",
            Scoat6Symptom::DifficultyConcentrating => "Difficulty concentrating",
            Scoat6Symptom::DifficultyRemembering => "Difficulty remembering",
            Scoat6Symptom::FatigueOrLowEnergy => "Fatigue or low energy",
            Scoat6Symptom::Confusion => "Confusion",
            Scoat6Symptom::Drowsiness => "Drowsiness",
            Scoat6Symptom::MoreEmotional => "More emotional",
            Scoat6Symptom::Irritability => "Irritability",
            Scoat6Symptom::Sadness => "Sadness",
            Scoat6Symptom::NervousOrAnxious => "Nervous or anxious",
            Scoat6Symptom::SleepDisturbance => "Sleep disturbance",
            Scoat6Symptom::AbnormalHeartRate => "Abnormal heart rate",
            Scoat6Symptom::ExcessiveSweating => "Excessive sweating",
            Scoat6Symptom::Other => "Other",
        }
    }
}

/// A SCOAT6 symptom column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Timepoint {
    PreInjury,
    DayInjured,
    Consult1,
    Consult2,
    Consult3,
}

impl Timepoint {
    pub const ALL: [Timepoint; 5] = [
        Timepoint::PreInjury,
        Timepoint::DayInjured,
        Timepoint::Consult1,
        Timepoint::Consult2,
        Timepoint::Consult3,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Timepoint::PreInjury => "pre_injury",
            Timepoint::DayInjured => "day_injured",
            Timepoint::Consult1 => "consult1",
            Timepoint::Consult2 => "consult2",
            Timepoint::Consult3 => "consult3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timepoint::PreInjury => "Pre-injury",
            Timepoint::DayInjured => "Day injured",
            Timepoint::Consult1 => "Consult 1",
            Timepoint::Consult2 => "Consult 2",
            Timepoint::Consult3 => "Consult 3",
        }
    }
}

impl FromStr for Timepoint {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Timepoint::ALL
            .into_iter()
            .find(|tp| tp.id() == normalized)
            .ok_or_else(|| CoreError::UnknownTimepoint(s.to_string()))
    }
}

impl fmt::Display for Timepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text context collected alongside the symptom ratings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SymptomReport {
    /// "What percent of normal do you feel?" as typed.
    pub percent_of_normal: String,
    pub why_not_normal: String,
    pub worse_with_physical: Option<bool>,
    pub worse_with_mental: Option<bool>,
}

/// SCAT6 single-column symptom ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SymptomChecklist {
    pub ratings: BTreeMap<Scat6Symptom, u8>,
}

impl Default for SymptomChecklist {
    fn default() -> Self {
        Self {
            ratings: Scat6Symptom::ALL.iter().map(|&s| (s, 0)).collect(),
        }
    }
}

impl SymptomChecklist {
    pub fn get(&self, item: Scat6Symptom) -> u8 {
        self.ratings.get(&item).copied().unwrap_or(0)
    }

    pub fn set(&mut self, item: Scat6Symptom, rating: u8) {
        self.ratings.insert(item, rating);
    }

    /// Every rating in form order, 0 for items never rated.
    pub fn ratings(&self) -> impl Iterator<Item = u8> + '_ {
        Scat6Symptom::ALL.iter().map(|&s| self.get(s))
    }
}

/// SCOAT6 symptom ratings keyed by (item, timepoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SymptomTable {
    pub ratings: BTreeMap<Scoat6Symptom, BTreeMap<Timepoint, u8>>,
    /// Name of the free-text "other" symptom.
    pub other_name: String,
    /// Date written above each consult column.
    pub column_dates: BTreeMap<Timepoint, String>,
}

impl SymptomTable {
    pub fn get(&self, item: Scoat6Symptom, timepoint: Timepoint) -> u8 {
        self.ratings
            .get(&item)
            .and_then(|row| row.get(&timepoint))
            .copied()
            .unwrap_or(0)
    }

    pub fn set(&mut self, item: Scoat6Symptom, timepoint: Timepoint, rating: u8) {
        self.ratings.entry(item).or_default().insert(timepoint, rating);
    }

    /// All ratings for one timepoint in form order.
    pub fn column(&self, timepoint: Timepoint) -> impl Iterator<Item = u8> + '_ {
        Scoat6Symptom::ALL
            .iter()
            .map(move |&s| self.get(s, timepoint))
    }

    /// Fully populated copy of the table, one row per item and one cell
    /// per timepoint.
    pub fn dense(&self) -> BTreeMap<Scoat6Symptom, BTreeMap<Timepoint, u8>> {
        Scoat6Symptom::ALL
            .iter()
            .map(|&s| {
                let row = Timepoint::ALL
                    .into_iter()
                    .map(|tp| (tp, self.get(s, tp)))
                    .collect();
                (s, row)
            })
            .collect()
    }
}
