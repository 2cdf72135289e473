use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest error count recorded for one mBESS stance.
pub const MAX_STANCE_ERRORS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Foot {
    Left,
    Right,
}

/// Error counts for the three mBESS stances on one surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StanceErrors {
    pub double_leg: u8,
    pub tandem: u8,
    pub single_leg: u8,
}

impl StanceErrors {
    pub fn counts(&self) -> [u8; 3] {
        [self.double_leg, self.tandem, self.single_leg]
    }
}

/// Modified Balance Error Scoring System.
///
/// The foam surface is optional and recorded as a whole: either all three
/// stances were tested on foam or none were.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Mbess {
    pub foot_tested: Option<Foot>,
    pub testing_surface: String,
    pub footwear: String,
    pub firm: StanceErrors,
    pub foam: Option<StanceErrors>,
}

/// Timed tandem gait, three trials typed as seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TandemGait {
    pub trials: [String; 3],
    pub abnormal: bool,
}

/// One dual-task gait trial. Present only once both parts were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DualTaskTrial {
    pub errors: u32,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DualTaskGait {
    pub practice: Option<DualTaskTrial>,
    pub trials: [Option<DualTaskTrial>; 3],
    pub alternate_starting_integer: String,
    pub trials_not_completed: bool,
    pub not_completed_reason: String,
}

/// SCOAT6 complex tandem gait point counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ComplexTandemGait {
    pub forward_eyes_open: u8,
    pub forward_eyes_closed: u8,
    pub backward_eyes_open: u8,
    pub backward_eyes_closed: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CognitiveTask {
    Words,
    SerialSevens,
    Months,
}

/// SCOAT6 dual-task cognitive accuracy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DualTaskCognitive {
    pub task: Option<CognitiveTask>,
    pub trials_attempted: u32,
    pub trials_correct: u32,
    pub average_time: String,
    pub comments: String,
}
