use anyhow::Result;
use chrono::{Local, NaiveDate};
use contracts::dashboards::common::CycleHeader;
use contracts::dashboards::d400_goal_tracking::{
    GoalTrackingRequest, GoalTrackingResponse, GoalTrackingRow,
};
use contracts::domain::a006_goal::Goal;

use crate::dashboards::cycle_data::CycleData;
use crate::shared::compliance::percent::{format_display, format_optional};
use crate::shared::compliance::{build_monthly_series, monthly_value_for_goal, scoped_goals, GoalScope};

/// Tracking table for the requested (or current) cycle
pub async fn get_goal_tracking(request: GoalTrackingRequest) -> Result<GoalTrackingResponse> {
    let data = CycleData::load(request.cycle_id.as_deref(), !request.is_simple_view()).await?;
    let scope = scoped_goals(request.role, request.user_department_id.as_deref());
    Ok(build_goal_tracking(&data, &scope, Local::now().date_naive()))
}

pub fn build_goal_tracking(data: &CycleData, scope: &GoalScope, today: NaiveDate) -> GoalTrackingResponse {
    let months = build_monthly_series(data.cycle.as_ref(), today);

    let rows: Vec<GoalTrackingRow> = data
        .scoped_goals(scope)
        .filter_map(|goal| build_row(data, goal, &months))
        .collect();

    GoalTrackingResponse {
        cycle: data.cycle.as_ref().map(CycleHeader::from),
        has_data: !rows.is_empty(),
        months,
        rows,
    }
}

fn build_row(
    data: &CycleData,
    goal: &Goal,
    months: &[contracts::shared::compliance::MonthSlot],
) -> Option<GoalTrackingRow> {
    let progress = data.numeric_progress(goal)?;
    let activity = data.activity_compliance(goal);

    let monthly_values = months
        .iter()
        .map(|slot| monthly_value_for_goal(goal, &data.entries, slot))
        .collect();

    Some(GoalTrackingRow {
        goal_id: goal.id.clone(),
        key: goal.key.clone(),
        name: goal.title().to_string(),
        indicator: goal.indicator.clone(),
        unit: goal.unit.clone(),
        accumulable: goal.accumulable,
        percentage_goal: goal.percentage,
        accumulated_display: format_display(progress.accumulated, goal.percentage),
        target_display: format_optional(progress.target, goal.percentage),
        baseline_display: format_optional(progress.baseline, goal.percentage),
        percentage: progress.percentage,
        raw_percentage: progress.raw_percentage,
        state: progress.state,
        monthly_values,
        activities_completed: activity.completed,
        activities_total: activity.total,
    })
}
