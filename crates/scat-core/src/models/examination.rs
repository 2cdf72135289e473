//! SCOAT6 physical examination blocks.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Finding {
    Normal,
    Abnormal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NeuroFinding {
    Normal,
    Abnormal,
    NotTested,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct OrthostaticReading {
    pub blood_pressure: String,
    pub heart_rate: String,
    pub symptomatic: bool,
    pub symptom_description: String,
    pub result: Option<Finding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Orthostatics {
    pub supine: OrthostaticReading,
    pub standing: OrthostaticReading,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CervicalExam {
    pub muscle_spasm: Option<Finding>,
    pub midline_tenderness: Option<Finding>,
    pub paravertebral_tenderness: Option<Finding>,
    pub flexion: Option<Finding>,
    pub extension: Option<Finding>,
    pub right_lateral_flexion: Option<Finding>,
    pub left_lateral_flexion: Option<Finding>,
    pub right_rotation: Option<Finding>,
    pub left_rotation: Option<Finding>,
}

impl CervicalExam {
    pub fn findings(&self) -> [Option<Finding>; 9] {
        [
            self.muscle_spasm,
            self.midline_tenderness,
            self.paravertebral_tenderness,
            self.flexion,
            self.extension,
            self.right_lateral_flexion,
            self.left_lateral_flexion,
            self.right_rotation,
            self.left_rotation,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NeuroExam {
    pub cranial_nerves: Option<NeuroFinding>,
    pub cranial_nerves_notes: String,
    pub limb_tone: Option<NeuroFinding>,
    pub strength: Option<NeuroFinding>,
    pub deep_tendon_reflexes: Option<NeuroFinding>,
    pub sensation: Option<NeuroFinding>,
    pub cerebellar_function: Option<NeuroFinding>,
    pub comments: String,
}

impl NeuroExam {
    pub fn findings(&self) -> [Option<NeuroFinding>; 6] {
        [
            self.cranial_nerves,
            self.limb_tone,
            self.strength,
            self.deep_tendon_reflexes,
            self.sensation,
            self.cerebellar_function,
        ]
    }
}

/// Symptom scores (0–10) asked before and after each mVOMS maneuver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct VomsSymptoms {
    pub headache: u8,
    pub dizziness: u8,
    pub nausea: u8,
    pub fogginess: u8,
}

impl VomsSymptoms {
    pub fn scores(&self) -> [u8; 4] {
        [self.headache, self.dizziness, self.nausea, self.fogginess]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct VomsManeuver {
    pub not_tested: bool,
    pub symptoms: VomsSymptoms,
    pub comments: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VomsManeuverKind {
    SmoothPursuits,
    SaccadesHorizontal,
    VorHorizontal,
    VisualMotionSensitivity,
}

impl VomsManeuverKind {
    pub const ALL: [VomsManeuverKind; 4] = [
        VomsManeuverKind::SmoothPursuits,
        VomsManeuverKind::SaccadesHorizontal,
        VomsManeuverKind::VorHorizontal,
        VomsManeuverKind::VisualMotionSensitivity,
    ];

    pub fn id(self) -> &'static str {
        match self {
            VomsManeuverKind::SmoothPursuits => "smooth_pursuits",
            VomsManeuverKind::SaccadesHorizontal => "saccades_horizontal",
            VomsManeuverKind::VorHorizontal => "vor_horizontal",
            VomsManeuverKind::VisualMotionSensitivity => "visual_motion_sensitivity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VomsManeuverKind::SmoothPursuits => "Smooth Pursuits",
            VomsManeuverKind::SaccadesHorizontal => "Saccades (Horizontal)",
            VomsManeuverKind::VorHorizontal => "VOR (Horizontal)",
            VomsManeuverKind::VisualMotionSensitivity => "Visual Motion Sensitivity",
        }
    }
}

/// Modified vestibular/ocular-motor screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Voms {
    pub baseline: VomsSymptoms,
    pub smooth_pursuits: VomsManeuver,
    pub saccades_horizontal: VomsManeuver,
    pub vor_horizontal: VomsManeuver,
    pub visual_motion_sensitivity: VomsManeuver,
}

impl Voms {
    pub fn maneuver(&self, kind: VomsManeuverKind) -> &VomsManeuver {
        match kind {
            VomsManeuverKind::SmoothPursuits => &self.smooth_pursuits,
            VomsManeuverKind::SaccadesHorizontal => &self.saccades_horizontal,
            VomsManeuverKind::VorHorizontal => &self.vor_horizontal,
            VomsManeuverKind::VisualMotionSensitivity => &self.visual_motion_sensitivity,
        }
    }
}
