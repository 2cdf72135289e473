use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    PreferNotToSay,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Handedness {
    Left,
    Right,
    Ambidextrous,
}

/// Identity fields common to both instruments. Free text; validated only
/// by the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Demographics {
    pub athlete_name: String,
    pub id_number: String,
    pub date_of_birth: String,
    pub date_of_examination: String,
    pub sex: Option<Sex>,
    pub dominant_hand: Option<Handedness>,
    pub sport_team_school: String,
    pub years_education: String,
    pub first_language: String,
    pub preferred_language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConcussionDiagnosis {
    Yes,
    No,
    Deferred,
}

/// Healthcare professional attestation block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Attestation {
    pub hcp_name: String,
    pub hcp_title: String,
    pub hcp_registration: String,
    pub hcp_date: String,
    pub hcp_signature: String,
}
