use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dashboards::common::CycleHeader;
use crate::enums::compliance_state::ComplianceState;
use crate::enums::user_role::UserRole;
use crate::shared::compliance::MonthSlot;

/// Request for the tracking table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTrackingRequest {
    /// Active (or most recent) cycle when omitted
    pub cycle_id: Option<String>,
    /// "simple" lists every goal, otherwise only active ones
    pub view: Option<String>,
    pub role: UserRole,
    pub user_department_id: Option<String>,
}

impl GoalTrackingRequest {
    pub fn is_simple_view(&self) -> bool {
        self.view.as_deref() == Some("simple")
    }
}

/// Tracking table: one row per goal, one column per month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTrackingResponse {
    pub cycle: Option<CycleHeader>,
    pub months: Vec<MonthSlot>,
    pub rows: Vec<GoalTrackingRow>,
    /// False when there was nothing to show or the data could not be read
    pub has_data: bool,
}

impl GoalTrackingResponse {
    pub fn empty() -> Self {
        Self {
            cycle: None,
            months: vec![],
            rows: vec![],
            has_data: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTrackingRow {
    pub goal_id: String,
    pub key: String,
    pub name: String,
    pub indicator: String,
    pub unit: String,
    pub accumulable: bool,
    pub percentage_goal: bool,
    /// e.g. "45.00 %" or "95.00"
    pub accumulated_display: String,
    pub target_display: String,
    pub baseline_display: String,
    /// Clamped to [0, 100]
    pub percentage: Decimal,
    pub raw_percentage: Decimal,
    pub state: ComplianceState,
    /// Aligned with `GoalTrackingResponse::months`; "-" for empty months
    pub monthly_values: Vec<String>,
    pub activities_completed: u32,
    pub activities_total: u32,
}
