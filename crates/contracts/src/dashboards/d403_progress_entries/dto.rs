use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::user_role::UserRole;

/// Request for the progress-entry report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReportRequest {
    pub cycle_id: Option<String>,
    pub department_id: Option<String>,
    pub role: UserRole,
    pub user_department_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReportResponse {
    pub rows: Vec<ProgressReportRow>,
    pub has_data: bool,
}

impl ProgressReportResponse {
    pub fn empty() -> Self {
        Self {
            rows: vec![],
            has_data: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReportRow {
    pub entry_id: String,
    pub department_name: String,
    pub goal_title: String,
    pub project_name: String,
    pub cycle_name: String,
    /// dd/mm/YYYY
    pub recorded_on: String,
    /// Display units (×100 for percentage goals), two decimals
    pub value: Decimal,
    pub target: Decimal,
    /// value / target × 100, two decimals; zero without target
    pub percent_of_target: Decimal,
}
