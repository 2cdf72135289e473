use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::examination::Finding;

/// One dated column of the longitudinal tracking table.
///
/// Holds copies of derived scores as they stood on `date` so visits can be
/// compared side by side. Orientation is absent for SCOAT6.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DecisionColumn {
    pub date: String,
    pub neurological_exam: Option<Finding>,
    pub symptom_number: u32,
    pub symptom_severity: u32,
    pub orientation: Option<u32>,
    pub immediate_memory: u32,
    pub concentration: u32,
    pub delayed_recall: u32,
    pub cognitive_total: u32,
    pub mbess_total: u32,
    pub tandem_gait_fastest: Option<f64>,
    pub dual_task_fastest: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DecisionTable {
    pub columns: [DecisionColumn; 3],
}
