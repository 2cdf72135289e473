use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::demographics::Demographics;

/// The two structured assessment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    /// Sport Concussion Assessment Tool: short-form sideline tool.
    Scat6,
    /// Sport Concussion Office Assessment Tool: multi-visit office tool.
    Scoat6,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 2] = [InstrumentKind::Scat6, InstrumentKind::Scoat6];

    /// Lowercase identifier used for keys and config (e.g. "scat6").
    pub fn id(self) -> &'static str {
        match self {
            InstrumentKind::Scat6 => "scat6",
            InstrumentKind::Scoat6 => "scoat6",
        }
    }

    /// Display label used in filenames and headings (e.g. "SCAT6").
    pub fn label(self) -> &'static str {
        match self {
            InstrumentKind::Scat6 => "SCAT6",
            InstrumentKind::Scoat6 => "SCOAT6",
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scat6" => Ok(InstrumentKind::Scat6),
            "scoat6" => Ok(InstrumentKind::Scoat6),
            _ => Err(CoreError::UnknownInstrument(s.to_string())),
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record belonging to one instrument.
pub trait Assessment: Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static {
    const KIND: InstrumentKind;

    fn demographics(&self) -> &Demographics;
}
