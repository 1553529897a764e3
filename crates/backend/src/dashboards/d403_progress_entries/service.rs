use anyhow::Result;
use contracts::dashboards::d403_progress_entries::{
    ProgressReportRequest, ProgressReportResponse, ProgressReportRow,
};
use contracts::domain::a001_department::Department;
use contracts::domain::a003_cycle::Cycle;
use contracts::domain::a005_project::Project;
use contracts::domain::a006_goal::Goal;
use contracts::domain::a007_goal_cycle_config::GoalCycleConfig;
use contracts::domain::a008_progress_entry::ProgressEntry;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::domain::{
    a001_department, a003_cycle, a005_project, a006_goal, a007_goal_cycle_config,
    a008_progress_entry,
};
use crate::shared::compliance::percent;
use crate::shared::compliance::{scoped_goals, GoalScope};
use crate::shared::format::format_report_date;

/// Everything the entry report reads
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub entries: Vec<ProgressEntry>,
    pub goals: Vec<Goal>,
    pub configs: Vec<GoalCycleConfig>,
    pub cycles: Vec<Cycle>,
    pub projects: Vec<Project>,
    pub departments: Vec<Department>,
}

pub async fn get_progress_entries(request: ProgressReportRequest) -> Result<ProgressReportResponse> {
    let cycles = a003_cycle::repository::list_all().await?;
    let requested = request.cycle_id.as_deref().filter(|id| !id.trim().is_empty());

    let entries = match requested {
        Some(id) => match cycles.iter().find(|c| c.id == id) {
            Some(cycle) => a008_progress_entry::repository::list_for_cycle(cycle).await?,
            None => {
                tracing::warn!("Progress report: cycle '{}' not found", id);
                return Ok(ProgressReportResponse::empty());
            }
        },
        None => a008_progress_entry::repository::list_all().await?,
    };

    let data = ReportData {
        entries,
        goals: a006_goal::repository::list(false).await?,
        configs: a007_goal_cycle_config::repository::list_all().await?,
        cycles,
        projects: a005_project::repository::list_all().await?,
        departments: a001_department::repository::list_all().await?,
    };
    let scope = scoped_goals(request.role, request.user_department_id.as_deref());

    Ok(build_progress_report(&data, &scope, request.department_id.as_deref()))
}

/// Cycle an entry belongs to: its own, or the cycle whose window holds the date
fn entry_cycle<'a>(entry: &ProgressEntry, cycles: &'a [Cycle]) -> Option<&'a Cycle> {
    match entry.cycle_id.as_deref() {
        Some(id) => cycles.iter().find(|c| c.id == id),
        None => cycles.iter().find(|c| c.contains(entry.recorded_on)),
    }
}

pub fn build_progress_report(
    data: &ReportData,
    scope: &GoalScope,
    department_filter: Option<&str>,
) -> ProgressReportResponse {
    let goals: HashMap<&str, &Goal> = data.goals.iter().map(|g| (g.id.as_str(), g)).collect();
    let projects: HashMap<&str, &str> = data
        .projects
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    let departments: HashMap<&str, &str> = data
        .departments
        .iter()
        .map(|d| (d.id.as_str(), d.name.as_str()))
        .collect();
    let department_filter = department_filter.filter(|d| !d.trim().is_empty());

    let rows: Vec<ProgressReportRow> = data
        .entries
        .iter()
        .filter_map(|entry| {
            let goal = goals.get(entry.goal_id.as_str())?;
            if !scope.allows(goal) {
                return None;
            }
            let department_id = entry
                .department_id
                .as_deref()
                .or(goal.department_id.as_deref());
            if let Some(filter) = department_filter {
                if department_id != Some(filter) {
                    return None;
                }
            }

            let cycle = entry_cycle(entry, &data.cycles);
            let target = cycle
                .and_then(|c| {
                    data.configs
                        .iter()
                        .find(|cfg| cfg.goal_id == goal.id && cfg.cycle_id == c.id)
                })
                .and_then(|cfg| cfg.target)
                .unwrap_or(Decimal::ZERO);

            Some(ProgressReportRow {
                entry_id: entry.id.clone(),
                department_name: department_id
                    .and_then(|id| departments.get(id))
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                goal_title: goal.title().to_string(),
                project_name: projects
                    .get(goal.project_id.as_str())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                cycle_name: cycle
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "-".to_string()),
                recorded_on: format_report_date(entry.recorded_on),
                value: percent::to_display(entry.value, goal.percentage),
                target: percent::to_display(target, goal.percentage),
                percent_of_target: percent::quantize(percent::ratio_percent(entry.value, target)),
            })
        })
        .collect();

    ProgressReportResponse {
        has_data: !rows.is_empty(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::cycle_data::fixtures::sample;
    use contracts::enums::user_role::UserRole;
    use rust_decimal_macros::dec;

    fn report_data() -> ReportData {
        let cycle_data = sample();
        ReportData {
            entries: cycle_data.entries,
            goals: cycle_data.goals,
            configs: cycle_data.configs,
            cycles: cycle_data.cycle.into_iter().collect(),
            projects: vec![Project {
                id: "prj-1".into(),
                key: "P1".into(),
                name: "Proyecto uno".into(),
                objective_id: "obj-1".into(),
            }],
            departments: vec![Department {
                id: "dep-1".into(),
                name: "Sistemas".into(),
            }],
        }
    }

    #[test]
    fn test_entry_rows() {
        let response = build_progress_report(&report_data(), &GoalScope::All, None);
        assert_eq!(response.rows.len(), 5);

        let first = &response.rows[0];
        assert_eq!(first.department_name, "Sistemas");
        assert_eq!(first.goal_title, "Meta g1");
        assert_eq!(first.project_name, "Proyecto uno");
        assert_eq!(first.cycle_name, "Ciclo c1");
        assert_eq!(first.recorded_on, "03/03/2025");
        assert_eq!(first.value, dec!(10.00));
        assert_eq!(first.target, dec!(80.00));
        assert_eq!(first.percent_of_target, dec!(12.50));

        // legacy entry without cycle still finds its cycle by date
        assert_eq!(response.rows[2].cycle_name, "Ciclo c1");

        let g2 = &response.rows[4];
        assert_eq!(g2.value, dec!(100.00));
        assert_eq!(g2.percent_of_target, dec!(100.00));
        assert_eq!(g2.project_name, "-");
    }

    #[test]
    fn test_entry_without_target_has_zero_percent() {
        let mut data = report_data();
        data.configs.clear();
        let response = build_progress_report(&data, &GoalScope::All, None);
        assert!(response.rows.iter().all(|r| r.percent_of_target == Decimal::ZERO));
        assert!(response.rows.iter().all(|r| r.target == Decimal::ZERO));
    }

    #[test]
    fn test_scope_and_department_filter() {
        let data = report_data();
        let scope = scoped_goals(UserRole::Docente, Some("dep-2"));
        assert!(!build_progress_report(&data, &scope, None).has_data);

        let filtered = build_progress_report(&data, &GoalScope::All, Some("dep-9"));
        assert!(filtered.rows.is_empty());

        let filtered = build_progress_report(&data, &GoalScope::All, Some("dep-1"));
        assert_eq!(filtered.rows.len(), 5);
    }
}
