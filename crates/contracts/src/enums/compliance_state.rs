use serde::{Deserialize, Serialize};
use std::fmt;

/// Compliance state of a goal, project or objective within a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceState {
    #[serde(rename = "Cumplida")]
    Cumplida,
    #[serde(rename = "En progreso")]
    EnProgreso,
    #[serde(rename = "Rezagada")]
    Rezagada,
    /// Goal without a meaningful target for the cycle
    #[serde(rename = "Sin meta")]
    SinMeta,
}

impl ComplianceState {
    /// Label shown in dashboards and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplianceState::Cumplida => "Cumplida",
            ComplianceState::EnProgreso => "En progreso",
            ComplianceState::Rezagada => "Rezagada",
            ComplianceState::SinMeta => "Sin meta",
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, ComplianceState::Cumplida)
    }

    /// Met or partially met. `Sin meta` has no progress to speak of.
    pub fn has_progress(&self) -> bool {
        matches!(self, ComplianceState::Cumplida | ComplianceState::EnProgreso)
    }

    pub fn all() -> Vec<ComplianceState> {
        vec![
            ComplianceState::Cumplida,
            ComplianceState::EnProgreso,
            ComplianceState::Rezagada,
            ComplianceState::SinMeta,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "cumplida" => Some(ComplianceState::Cumplida),
            "en progreso" => Some(ComplianceState::EnProgreso),
            "rezagada" | "rezago" => Some(ComplianceState::Rezagada),
            "sin meta" => Some(ComplianceState::SinMeta),
            _ => None,
        }
    }
}

impl fmt::Display for ComplianceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_spanish_labels() {
        let json = serde_json::to_string(&ComplianceState::EnProgreso).unwrap();
        assert_eq!(json, "\"En progreso\"");
        let back: ComplianceState = serde_json::from_str("\"Sin meta\"").unwrap();
        assert_eq!(back, ComplianceState::SinMeta);
    }

    #[test]
    fn test_from_display_name_accepts_legacy_rezago() {
        assert_eq!(
            ComplianceState::from_display_name("Rezago"),
            Some(ComplianceState::Rezagada)
        );
        assert_eq!(ComplianceState::from_display_name("otro"), None);
    }
}
