use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::reference::{DigitListKey, WORD_LIST_LEN, WordListKey};

/// SCAT6 orientation questions, one point each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Orientation {
    pub month: bool,
    pub date: bool,
    pub day_of_week: bool,
    pub year: bool,
    pub time: bool,
}

impl Orientation {
    pub fn answers(&self) -> [bool; 5] {
        [self.month, self.date, self.day_of_week, self.year, self.time]
    }
}

/// Three immediate-memory trials over the selected word list.
///
/// Each trial holds one flag per word in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ImmediateMemory {
    pub word_list: Option<WordListKey>,
    pub trials: [Vec<bool>; 3],
    pub time_completed: String,
}

impl Default for ImmediateMemory {
    fn default() -> Self {
        Self {
            word_list: None,
            trials: [
                vec![false; WORD_LIST_LEN],
                vec![false; WORD_LIST_LEN],
                vec![false; WORD_LIST_LEN],
            ],
            time_completed: String::new(),
        }
    }
}

impl ImmediateMemory {
    pub fn word_list_selected(&self) -> bool {
        self.word_list.is_some()
    }

    /// Words for the active list, empty when none was chosen.
    pub fn words(&self) -> &'static [&'static str] {
        self.word_list.map(WordListKey::words).unwrap_or(&[])
    }

    /// Switch lists. Trials are reset to the new list's length when the
    /// list actually changes.
    pub fn select_word_list(&mut self, key: WordListKey) {
        if self.word_list == Some(key) {
            return;
        }
        let len = key.words().len();
        self.word_list = Some(key);
        for trial in &mut self.trials {
            *trial = vec![false; len];
        }
    }
}

/// Digits backward plus months in reverse order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Concentration {
    pub digit_list: Option<DigitListKey>,
    /// Number of digit lengths answered correctly (0–4).
    pub digits_backward: u8,
    /// Elapsed seconds as typed; parsed at scoring time.
    pub months_reverse_time: String,
    pub months_reverse_errors: u32,
}

/// Recall of the immediate-memory list after a delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DelayedRecall {
    pub start_time: String,
    pub recalled: Vec<bool>,
}

impl Default for DelayedRecall {
    fn default() -> Self {
        Self {
            start_time: String::new(),
            recalled: vec![false; WORD_LIST_LEN],
        }
    }
}
