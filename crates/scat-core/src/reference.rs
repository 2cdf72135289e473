//! Fixed stimulus vocabularies shared by SCAT6 and SCOAT6.
//!
//! Both instruments administer the same three 10-word lists for immediate
//! memory and delayed recall, and the same three digit lists for the
//! digits-backward concentration task.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Number of words in every immediate-memory list.
pub const WORD_LIST_LEN: usize = 10;

const WORD_LIST_A: [&str; WORD_LIST_LEN] = [
    "Jacket", "Arrow", "Pepper", "Cotton", "Movie", "Dollar", "Honey", "Mirror", "Saddle", "Anchor",
];

const WORD_LIST_B: [&str; WORD_LIST_LEN] = [
    "Finger", "Penny", "Blanket", "Lemon", "Insect", "Candle", "Paper", "Sugar", "Sandwich",
    "Wagon",
];

const WORD_LIST_C: [&str; WORD_LIST_LEN] = [
    "Baby", "Monkey", "Perfume", "Sunset", "Iron", "Elbow", "Apple", "Carpet", "Saddle", "Bubble",
];

// Two strings per length (3, 4, 5, 6), read in order.
const DIGIT_LIST_A: [&str; 8] = [
    "4-9-3",
    "6-2-9",
    "3-8-1-4",
    "3-2-7-9",
    "6-2-9-7-1",
    "1-5-2-8-6",
    "7-1-8-4-6-2",
    "5-3-9-1-4-8",
];

const DIGIT_LIST_B: [&str; 8] = [
    "5-2-6",
    "4-1-5",
    "1-7-9-5",
    "4-9-6-8",
    "4-8-5-2-7",
    "6-1-8-4-3",
    "8-3-1-9-6-4",
    "7-2-4-8-5-6",
];

const DIGIT_LIST_C: [&str; 8] = [
    "1-4-2",
    "6-5-8",
    "6-8-3-1",
    "3-4-8-1",
    "4-9-1-5-3",
    "6-8-2-5-1",
    "3-7-6-5-1-9",
    "9-2-6-5-1-4",
];

/// Which 10-word list was read to the athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WordListKey {
    A,
    B,
    C,
}

impl WordListKey {
    pub const ALL: [WordListKey; 3] = [WordListKey::A, WordListKey::B, WordListKey::C];

    pub fn words(self) -> &'static [&'static str] {
        match self {
            WordListKey::A => &WORD_LIST_A,
            WordListKey::B => &WORD_LIST_B,
            WordListKey::C => &WORD_LIST_C,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            WordListKey::A => "A",
            WordListKey::B => "B",
            WordListKey::C => "C",
        }
    }
}

/// Which digit list was used for digits backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DigitListKey {
    A,
    B,
    C,
}

impl DigitListKey {
    pub const ALL: [DigitListKey; 3] = [DigitListKey::A, DigitListKey::B, DigitListKey::C];

    pub fn digits(self) -> &'static [&'static str] {
        match self {
            DigitListKey::A => &DIGIT_LIST_A,
            DigitListKey::B => &DIGIT_LIST_B,
            DigitListKey::C => &DIGIT_LIST_C,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            DigitListKey::A => "A",
            DigitListKey::B => "B",
            DigitListKey::C => "C",
        }
    }
}

fn parse_letter(s: &str) -> Result<usize, CoreError> {
    match s.trim() {
        "A" | "a" => Ok(0),
        "B" | "b" => Ok(1),
        "C" | "c" => Ok(2),
        other => Err(CoreError::UnknownListKey(other.to_string())),
    }
}

impl FromStr for WordListKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_letter(s).map(|i| WordListKey::ALL[i])
    }
}

impl FromStr for DigitListKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_letter(s).map(|i| DigitListKey::ALL[i])
    }
}

impl fmt::Display for WordListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl fmt::Display for DigitListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
