use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dashboards::common::CycleHeader;
use crate::enums::activity_state::ActivityState;
use crate::enums::compliance_signal::ComplianceSignal;
use crate::enums::compliance_state::ComplianceState;
use crate::enums::user_role::UserRole;
use crate::shared::compliance::{ActivityCompliance, GoalProgress};

/// Request for the per-goal compliance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalComplianceRequest {
    pub cycle_id: Option<String>,
    /// Report filter, independent of the caller's own department
    pub department_id: Option<String>,
    /// Signal used for statistics; configured default when omitted
    pub signal: Option<ComplianceSignal>,
    pub role: UserRole,
    pub user_department_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalComplianceResponse {
    pub cycle: Option<CycleHeader>,
    pub signal: ComplianceSignal,
    pub rows: Vec<GoalComplianceRow>,
    pub stats: ComplianceStats,
    pub summary: ExecutiveSummary,
    pub has_data: bool,
}

impl GoalComplianceResponse {
    pub fn empty(signal: ComplianceSignal) -> Self {
        let stats = ComplianceStats::default();
        Self {
            cycle: None,
            signal,
            rows: vec![],
            summary: ExecutiveSummary::from_stats(&stats),
            stats,
            has_data: false,
        }
    }
}

/// Both compliance signals of one goal, side by side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalComplianceRow {
    pub goal_id: String,
    pub key: String,
    pub name: String,
    pub indicator: String,
    pub project_name: String,
    pub department_name: String,
    pub cycle_name: String,
    pub target_display: String,
    pub accumulated_display: String,
    /// None when the goal has no configuration for the cycle
    pub numeric: Option<GoalProgress>,
    pub activity: ActivityCompliance,
    /// State under the requested signal
    pub state: ComplianceState,
    pub activities: Vec<ActivityLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLine {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub state: ActivityState,
    pub responsible: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStats {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub lagging: u32,
    /// in_progress + lagging
    pub pending: u32,
    /// completed / total × 100, one decimal
    pub completion_percentage: Decimal,
}

/// Traffic-light verdict over a set of goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "Sin metas asignadas")]
    SinMetas,
    #[serde(rename = "Excelente desempeño")]
    Excelente,
    #[serde(rename = "Buen desempeño")]
    Bueno,
    #[serde(rename = "En riesgo")]
    EnRiesgo,
    #[serde(rename = "Crítico")]
    Critico,
}

impl OverallStatus {
    pub fn from_stats(stats: &ComplianceStats) -> Self {
        if stats.total == 0 {
            OverallStatus::SinMetas
        } else if stats.lagging == 0 && stats.completed == stats.total {
            OverallStatus::Excelente
        } else if stats.lagging == 0 {
            OverallStatus::Bueno
        } else if stats.lagging * 2 > stats.total {
            OverallStatus::Critico
        } else {
            OverallStatus::EnRiesgo
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, OverallStatus::Excelente | OverallStatus::Bueno)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub overall: OverallStatus,
    pub achievements: String,
    pub critical_issues: String,
    pub recommendation: String,
}

impl ExecutiveSummary {
    pub fn from_stats(stats: &ComplianceStats) -> Self {
        let overall = OverallStatus::from_stats(stats);
        let achievements = format!(
            "Se completaron {} metas de un total de {} ({}%).",
            stats.completed, stats.total, stats.completion_percentage
        );
        let critical_issues = if stats.lagging > 0 {
            format!(
                "Existen {} metas rezagadas que requieren revisión y apoyo adicional.",
                stats.lagging
            )
        } else {
            "Sin incidencias críticas en el periodo.".to_string()
        };
        let recommendation = if overall.is_good() {
            "Continuar con el ritmo actual y reforzar el seguimiento de metas en progreso."
        } else {
            "Revisar las metas con menor avance y ajustar las estrategias de ejecución."
        };
        Self {
            overall,
            achievements,
            critical_issues,
            recommendation: recommendation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u32, completed: u32, lagging: u32) -> ComplianceStats {
        ComplianceStats {
            total,
            completed,
            in_progress: total - completed - lagging,
            lagging,
            pending: total - completed,
            completion_percentage: Decimal::ZERO,
        }
    }

    #[test]
    fn test_overall_status_thresholds() {
        assert_eq!(OverallStatus::from_stats(&stats(0, 0, 0)), OverallStatus::SinMetas);
        assert_eq!(OverallStatus::from_stats(&stats(4, 4, 0)), OverallStatus::Excelente);
        assert_eq!(OverallStatus::from_stats(&stats(4, 2, 0)), OverallStatus::Bueno);
        assert_eq!(OverallStatus::from_stats(&stats(4, 1, 2)), OverallStatus::EnRiesgo);
        assert_eq!(OverallStatus::from_stats(&stats(4, 0, 3)), OverallStatus::Critico);
    }

    #[test]
    fn test_summary_mentions_lagging_goals() {
        let summary = ExecutiveSummary::from_stats(&stats(4, 1, 2));
        assert!(summary.critical_issues.contains("2 metas rezagadas"));
        assert!(summary.recommendation.starts_with("Revisar"));
    }
}
