use anyhow::Result;
use contracts::dashboards::common::CycleHeader;
use contracts::dashboards::d402_rollup::{
    GoalStateLine, ObjectiveRollUpRow, ProjectChartSeries, ProjectRollUpRow, RollUpRequest,
    RollUpResponse,
};
use contracts::domain::a004_objective::Objective;
use contracts::domain::a005_project::Project;
use contracts::enums::compliance_signal::{ComplianceSignal, EmptyChildrenPolicy};

use crate::dashboards::cycle_data::CycleData;
use crate::domain::{a002_program, a004_objective, a005_project};
use crate::shared::compliance::rollup::sum_counts;
use crate::shared::compliance::{
    roll_up_objective, roll_up_project, scoped_goals, GoalEvaluation, GoalScope,
};
use crate::shared::config::compliance_settings;

/// Program structure of the cycle: objectives with their projects
#[derive(Debug, Clone, Default)]
pub struct ProgramTree {
    pub program_name: Option<String>,
    pub objectives: Vec<Objective>,
    pub projects: Vec<Project>,
}

pub async fn get_rollup(request: RollUpRequest) -> Result<RollUpResponse> {
    let settings = compliance_settings();
    let signal = request.signal.unwrap_or(settings.default_signal);
    let policy = request.empty_children.unwrap_or(settings.empty_children);

    let data = CycleData::load(request.cycle_id.as_deref(), true).await?;
    let Some(cycle) = &data.cycle else {
        return Ok(RollUpResponse::empty(signal, policy));
    };

    let program = a002_program::repository::get_by_id(&cycle.program_id).await?;
    let objectives = a004_objective::repository::list_by_program(&cycle.program_id).await?;
    let objective_ids: Vec<String> = objectives.iter().map(|o| o.id.clone()).collect();
    let projects = a005_project::repository::list_by_objectives(&objective_ids).await?;

    let tree = ProgramTree {
        program_name: program.map(|p| p.name),
        objectives,
        projects,
    };
    let scope = scoped_goals(request.role, request.user_department_id.as_deref());

    Ok(build_rollup(&data, &tree, &scope, signal, policy))
}

pub fn build_rollup(
    data: &CycleData,
    tree: &ProgramTree,
    scope: &GoalScope,
    signal: ComplianceSignal,
    policy: EmptyChildrenPolicy,
) -> RollUpResponse {
    let mut chart = ProjectChartSeries::default();
    let mut project_counts = Vec::new();

    let objectives: Vec<ObjectiveRollUpRow> = tree
        .objectives
        .iter()
        .map(|objective| {
            let projects: Vec<ProjectRollUpRow> = tree
                .projects
                .iter()
                .filter(|p| p.objective_id == objective.id)
                .map(|project| build_project(data, project, scope, signal, policy))
                .collect();

            for project in &projects {
                chart.project_names.push(project.name.clone());
                chart.completed.push(project.rollup.counts.completed);
                chart.in_progress.push(project.rollup.counts.in_progress);
                chart.lagging.push(project.rollup.counts.lagging);
                project_counts.push(project.rollup.counts.clone());
            }

            let project_rollups: Vec<_> = projects.iter().map(|p| p.rollup.clone()).collect();
            ObjectiveRollUpRow {
                objective_id: objective.id.clone(),
                key: objective.key.clone(),
                description: objective.description.clone(),
                rollup: roll_up_objective(&project_rollups, policy),
                projects,
            }
        })
        .collect();

    let objective_rollups: Vec<_> = objectives.iter().map(|o| o.rollup.clone()).collect();
    let objective_totals = roll_up_objective(&objective_rollups, policy).counts;
    let goal_totals = sum_counts(&project_counts);

    RollUpResponse {
        cycle: data.cycle.as_ref().map(CycleHeader::from),
        program_name: tree.program_name.clone(),
        signal,
        empty_children: policy,
        has_data: goal_totals.total > 0,
        objectives,
        objective_totals,
        goal_totals,
        chart,
    }
}

fn build_project(
    data: &CycleData,
    project: &Project,
    scope: &GoalScope,
    signal: ComplianceSignal,
    policy: EmptyChildrenPolicy,
) -> ProjectRollUpRow {
    let goals: Vec<_> = data
        .scoped_goals(scope)
        .filter(|g| g.project_id == project.id)
        .collect();
    let evaluations: Vec<GoalEvaluation> = goals.iter().map(|g| data.evaluate(g)).collect();

    let lines = goals
        .iter()
        .zip(&evaluations)
        .map(|(goal, evaluation)| GoalStateLine {
            goal_id: goal.id.clone(),
            key: goal.key.clone(),
            name: goal.title().to_string(),
            state: evaluation.state_for(signal),
            total_activities: evaluation.activity.total,
        })
        .collect();

    ProjectRollUpRow {
        project_id: project.id.clone(),
        key: project.key.clone(),
        name: project.name.clone(),
        rollup: roll_up_project(&evaluations, signal, policy),
        goals: lines,
    }
}
