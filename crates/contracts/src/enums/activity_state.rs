use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical state of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityState {
    #[serde(rename = "Activa")]
    Activa,
    #[serde(rename = "En Proceso")]
    EnProceso,
    #[serde(rename = "Cumplida")]
    Cumplida,
    #[serde(rename = "No Cumplida")]
    NoCumplida,
}

impl ActivityState {
    /// Value persisted in the `estado` column
    pub fn code(&self) -> &'static str {
        match self {
            ActivityState::Activa => "Activa",
            ActivityState::EnProceso => "En Proceso",
            ActivityState::Cumplida => "Cumplida",
            ActivityState::NoCumplida => "No Cumplida",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ActivityState::Cumplida)
    }

    /// Case-insensitive parse; stored rows were written by hand in places.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "activa" => Some(ActivityState::Activa),
            "en proceso" => Some(ActivityState::EnProceso),
            "cumplida" => Some(ActivityState::Cumplida),
            "no cumplida" => Some(ActivityState::NoCumplida),
            _ => None,
        }
    }
}

impl Default for ActivityState {
    fn default() -> Self {
        ActivityState::Activa
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
