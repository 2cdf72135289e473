//! Severity bands for the short psychometric screens.
//!
//! Bands are closed intervals that tile `0..` without gaps or overlap; the
//! top band is open-ended so an out-of-range sum still classifies.

use scat_core::models::screens::LikertScreen;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rules::likert_total;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub min: u32,
    /// Inclusive upper bound, `None` for the open top band.
    pub max: Option<u32>,
    pub label: &'static str,
}

impl Band {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && self.max.is_none_or(|max| score <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityScale {
    pub id: &'static str,
    pub name: &'static str,
    /// Highest rating allowed for each item, in item order.
    pub item_max: &'static [u8],
    pub bands: &'static [Band],
}

impl SeverityScale {
    pub fn max_score(&self) -> u32 {
        self.item_max.iter().map(|&m| u32::from(m)).sum()
    }

    pub fn band(&self, score: u32) -> Option<&Band> {
        self.bands.iter().find(|b| b.contains(score))
    }

    pub fn classify(&self, score: u32) -> &'static str {
        self.band(score).map(|b| b.label).unwrap_or("")
    }
}

/// Generalized Anxiety Disorder 7-item scale.
pub const GAD7: SeverityScale = SeverityScale {
    id: "gad7",
    name: "GAD-7",
    item_max: &[3, 3, 3, 3, 3, 3, 3],
    bands: &[
        Band { min: 0, max: Some(4), label: "Minimal anxiety" },
        Band { min: 5, max: Some(9), label: "Mild anxiety" },
        Band { min: 10, max: Some(14), label: "Moderate anxiety" },
        Band { min: 15, max: None, label: "Severe anxiety" },
    ],
};

/// Patient Health Questionnaire 2-item depression screen. A total of 3 or
/// more is a positive screen.
pub const PHQ2: SeverityScale = SeverityScale {
    id: "phq2",
    name: "PHQ-2",
    item_max: &[3, 3],
    bands: &[
        Band { min: 0, max: Some(2), label: "Negative screen" },
        Band { min: 3, max: None, label: "Positive screen" },
    ],
};

/// SCOAT6 sleep screen: hours and satisfaction rated 0–4, the rest 0–3.
pub const SLEEP: SeverityScale = SeverityScale {
    id: "sleep",
    name: "Sleep screen",
    item_max: &[4, 4, 3, 3, 3],
    bands: &[
        Band { min: 0, max: Some(4), label: "Normal" },
        Band { min: 5, max: Some(7), label: "Mild" },
        Band { min: 8, max: Some(10), label: "Moderate" },
        Band { min: 11, max: None, label: "Severe" },
    ],
};

/// Total and band of one screen. Both are `None` when the screen was not
/// done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenResult {
    pub score: Option<u32>,
    pub severity: Option<String>,
}

pub fn screen_result(screen: &LikertScreen, scale: &SeverityScale) -> ScreenResult {
    let score = likert_total(screen, scale);
    ScreenResult {
        score,
        severity: score.map(|s| scale.classify(s).to_string()),
    }
}
