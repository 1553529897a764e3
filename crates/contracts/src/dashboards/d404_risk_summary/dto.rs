use serde::{Deserialize, Serialize};

use crate::enums::risk_level::RiskLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReportResponse {
    /// Sorted from `Crítico` down to `Bajo`
    pub rows: Vec<RiskRow>,
    pub level_counts: Vec<RiskLevelCount>,
    pub total_risks: u32,
    pub has_data: bool,
}

impl RiskReportResponse {
    pub fn empty() -> Self {
        Self {
            rows: vec![],
            level_counts: RiskLevel::all()
                .into_iter()
                .map(|level| RiskLevelCount { level, count: 0 })
                .collect(),
            total_risks: 0,
            has_data: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRow {
    pub risk_id: String,
    /// Goal reached through the risk's activity, "-" when unlinked
    pub goal_title: String,
    pub statement: String,
    pub probability: i32,
    pub impact: i32,
    pub value: i32,
    pub level: RiskLevel,
    pub color: String,
    pub mitigation_count: u32,
    /// Latest action or "Sin acciones"
    pub last_mitigation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLevelCount {
    pub level: RiskLevel,
    pub count: u32,
}
