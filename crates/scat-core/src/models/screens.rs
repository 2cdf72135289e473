use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const GAD7_ITEMS: usize = 7;
pub const PHQ2_ITEMS: usize = 2;
pub const SLEEP_ITEMS: usize = 5;

/// A short Likert questionnaire that the clinician may skip.
///
/// When `not_done` is set the item values are ignored for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LikertScreen {
    pub not_done: bool,
    pub items: Vec<u8>,
}

impl LikertScreen {
    pub fn with_items(count: usize) -> Self {
        Self {
            not_done: false,
            items: vec![0; count],
        }
    }

    pub fn gad7() -> Self {
        Self::with_items(GAD7_ITEMS)
    }

    pub fn phq2() -> Self {
        Self::with_items(PHQ2_ITEMS)
    }

    pub fn sleep() -> Self {
        Self::with_items(SLEEP_ITEMS)
    }
}
