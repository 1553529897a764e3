use anyhow::Result;
use contracts::dashboards::common::CycleHeader;
use contracts::dashboards::d401_goal_compliance::{
    ActivityLine, ComplianceStats, ExecutiveSummary, GoalComplianceRequest,
    GoalComplianceResponse, GoalComplianceRow,
};
use contracts::domain::a001_department::Department;
use contracts::domain::a005_project::Project;
use contracts::enums::compliance_signal::{ComplianceSignal, EmptyChildrenPolicy};
use contracts::enums::compliance_state::ComplianceState;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::dashboards::cycle_data::CycleData;
use crate::domain::{a001_department, a005_project};
use crate::shared::compliance::percent::{self, format_display, format_optional};
use crate::shared::compliance::{roll_up, scoped_goals, GoalScope};
use crate::shared::config::compliance_settings;

/// Lookup names for goal rows
#[derive(Debug, Clone, Default)]
pub struct Names {
    pub projects: HashMap<String, String>,
    pub departments: HashMap<String, String>,
}

impl Names {
    pub fn new(projects: Vec<Project>, departments: Vec<Department>) -> Self {
        Self {
            projects: projects.into_iter().map(|p| (p.id, p.name)).collect(),
            departments: departments.into_iter().map(|d| (d.id, d.name)).collect(),
        }
    }

    fn project(&self, id: &str) -> String {
        self.projects
            .get(id)
            .cloned()
            .unwrap_or_else(|| "-".to_string())
    }

    fn department(&self, id: Option<&str>) -> String {
        id.and_then(|id| self.departments.get(id))
            .cloned()
            .unwrap_or_else(|| "Sin departamento".to_string())
    }
}

/// `signal` is resolved by the caller, which also needs it for the empty response
pub async fn get_goal_compliance(
    request: GoalComplianceRequest,
    signal: ComplianceSignal,
) -> Result<GoalComplianceResponse> {
    let settings = compliance_settings();

    let data = CycleData::load(request.cycle_id.as_deref(), true).await?;
    let names = Names::new(
        a005_project::repository::list_all().await?,
        a001_department::repository::list_all().await?,
    );
    let scope = scoped_goals(request.role, request.user_department_id.as_deref());

    Ok(build_goal_compliance(
        &data,
        &names,
        &scope,
        request.department_id.as_deref(),
        signal,
        settings.empty_children,
    ))
}

pub fn build_goal_compliance(
    data: &CycleData,
    names: &Names,
    scope: &GoalScope,
    department_filter: Option<&str>,
    signal: ComplianceSignal,
    policy: EmptyChildrenPolicy,
) -> GoalComplianceResponse {
    let cycle_name = data
        .cycle
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let department_filter = department_filter.filter(|d| !d.trim().is_empty());

    let mut signal_states = Vec::new();
    let rows: Vec<GoalComplianceRow> = data
        .scoped_goals(scope)
        .filter(|g| department_filter.map_or(true, |d| g.department_id.as_deref() == Some(d)))
        .map(|goal| {
            let evaluation = data.evaluate(goal);
            let signal_state = evaluation.state_for(signal);
            signal_states.push(signal_state);

            let activities = data
                .goal_activities(goal)
                .map(|a| ActivityLine {
                    name: a.name.clone().unwrap_or_else(|| a.description.clone()),
                    description: a.description.clone(),
                    start_date: a.start_date,
                    end_date: a.end_date,
                    state: a.state,
                    responsible: a.responsible.clone().unwrap_or_default(),
                })
                .collect();

            let numeric = evaluation.numeric;
            GoalComplianceRow {
                goal_id: goal.id.clone(),
                key: goal.key.clone(),
                name: goal.title().to_string(),
                indicator: goal.indicator.clone(),
                project_name: names.project(&goal.project_id),
                department_name: names.department(goal.department_id.as_deref()),
                cycle_name: cycle_name.clone(),
                target_display: format_optional(
                    numeric.as_ref().and_then(|n| n.target),
                    goal.percentage,
                ),
                accumulated_display: numeric
                    .as_ref()
                    .map(|n| format_display(n.accumulated, goal.percentage))
                    .unwrap_or_else(|| "-".to_string()),
                state: signal_state.unwrap_or(match signal {
                    ComplianceSignal::Numeric => ComplianceState::SinMeta,
                    ComplianceSignal::Activity => ComplianceState::Rezagada,
                }),
                numeric,
                activity: evaluation.activity,
                activities,
            }
        })
        .collect();

    let counts = roll_up(signal_states, policy).counts;
    let stats = ComplianceStats {
        total: counts.total,
        completed: counts.completed,
        in_progress: counts.in_progress,
        lagging: counts.lagging,
        pending: counts.in_progress + counts.lagging,
        completion_percentage: percent::quantize_dp(
            percent::ratio_percent(Decimal::from(counts.completed), Decimal::from(counts.total)),
            1,
        ),
    };

    GoalComplianceResponse {
        cycle: data.cycle.as_ref().map(CycleHeader::from),
        signal,
        has_data: !rows.is_empty(),
        summary: ExecutiveSummary::from_stats(&stats),
        stats,
        rows,
    }
}
