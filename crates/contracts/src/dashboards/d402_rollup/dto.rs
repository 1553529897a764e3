use serde::{Deserialize, Serialize};

use crate::dashboards::common::CycleHeader;
use crate::enums::compliance_signal::{ComplianceSignal, EmptyChildrenPolicy};
use crate::enums::compliance_state::ComplianceState;
use crate::enums::user_role::UserRole;
use crate::shared::compliance::{RollUp, RollUpCounts};

/// Request for the objective → project → goal roll-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollUpRequest {
    pub cycle_id: Option<String>,
    pub signal: Option<ComplianceSignal>,
    pub empty_children: Option<EmptyChildrenPolicy>,
    pub role: UserRole,
    pub user_department_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollUpResponse {
    pub cycle: Option<CycleHeader>,
    pub program_name: Option<String>,
    pub signal: ComplianceSignal,
    pub empty_children: EmptyChildrenPolicy,
    pub objectives: Vec<ObjectiveRollUpRow>,
    /// Objective-level counters
    pub objective_totals: RollUpCounts,
    /// Goal-level counters summed over every project
    pub goal_totals: RollUpCounts,
    pub chart: ProjectChartSeries,
    pub has_data: bool,
}

impl RollUpResponse {
    pub fn empty(signal: ComplianceSignal, empty_children: EmptyChildrenPolicy) -> Self {
        Self {
            cycle: None,
            program_name: None,
            signal,
            empty_children,
            objectives: vec![],
            objective_totals: RollUpCounts::default(),
            goal_totals: RollUpCounts::default(),
            chart: ProjectChartSeries::default(),
            has_data: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveRollUpRow {
    pub objective_id: String,
    pub key: Option<String>,
    pub description: String,
    pub rollup: RollUp,
    pub projects: Vec<ProjectRollUpRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRollUpRow {
    pub project_id: String,
    pub key: String,
    pub name: String,
    pub rollup: RollUp,
    pub goals: Vec<GoalStateLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalStateLine {
    pub goal_id: String,
    pub key: String,
    pub name: String,
    /// None when the goal has no data for the signal in this cycle
    pub state: Option<ComplianceState>,
    pub total_activities: u32,
}

/// Chart-ready series, one entry per project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectChartSeries {
    pub project_names: Vec<String>,
    pub completed: Vec<u32>,
    pub in_progress: Vec<u32>,
    pub lagging: Vec<u32>,
}
