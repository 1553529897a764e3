use serde::{Deserialize, Serialize};

/// Risk level derived from probability × impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Bajo")]
    Bajo,
    #[serde(rename = "Medio")]
    Medio,
    #[serde(rename = "Alto")]
    Alto,
    #[serde(rename = "Crítico")]
    Critico,
}

impl RiskLevel {
    pub fn from_value(value: i32) -> Self {
        match value {
            v if v <= 25 => RiskLevel::Bajo,
            v if v <= 50 => RiskLevel::Medio,
            v if v <= 90 => RiskLevel::Alto,
            _ => RiskLevel::Critico,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Bajo => "Bajo",
            RiskLevel::Medio => "Medio",
            RiskLevel::Alto => "Alto",
            RiskLevel::Critico => "Crítico",
        }
    }

    /// Bootstrap color class used by the report templates
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Bajo => "success",
            RiskLevel::Medio => "warning",
            RiskLevel::Alto => "orange",
            RiskLevel::Critico => "danger",
        }
    }

    pub fn all() -> Vec<RiskLevel> {
        vec![
            RiskLevel::Bajo,
            RiskLevel::Medio,
            RiskLevel::Alto,
            RiskLevel::Critico,
        ]
    }
}
