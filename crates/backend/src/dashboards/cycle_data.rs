//! Rows every compliance dashboard needs for one cycle, loaded once per request.

use anyhow::Result;
use contracts::domain::a003_cycle::Cycle;
use contracts::domain::a006_goal::Goal;
use contracts::domain::a007_goal_cycle_config::GoalCycleConfig;
use contracts::domain::a008_progress_entry::ProgressEntry;
use contracts::domain::a009_activity::Activity;
use contracts::shared::compliance::{ActivityCompliance, GoalProgress};

use crate::domain::{a003_cycle, a006_goal, a007_goal_cycle_config, a008_progress_entry, a009_activity};
use crate::shared::compliance::{
    activities_for_goal, compute_activity_compliance, compute_for_cycle, compute_goal_progress,
    GoalEvaluation, GoalScope,
};

#[derive(Debug, Clone, Default)]
pub struct CycleData {
    pub cycle: Option<Cycle>,
    pub goals: Vec<Goal>,
    pub configs: Vec<GoalCycleConfig>,
    /// Already restricted to the cycle when there is one
    pub entries: Vec<ProgressEntry>,
    pub activities: Vec<Activity>,
}

impl CycleData {
    pub async fn load(cycle_id: Option<&str>, only_active_goals: bool) -> Result<Self> {
        let cycle = a003_cycle::service::resolve_cycle(cycle_id).await?;
        let goals = a006_goal::repository::list(only_active_goals).await?;

        let (configs, entries, activities) = match &cycle {
            Some(cycle) => (
                a007_goal_cycle_config::repository::list_by_cycle(&cycle.id).await?,
                a008_progress_entry::repository::list_for_cycle(cycle).await?,
                a009_activity::repository::list_for_cycle(&cycle.id).await?,
            ),
            None => (
                vec![],
                a008_progress_entry::repository::list_all().await?,
                a009_activity::repository::list_all().await?,
            ),
        };

        Ok(Self {
            cycle,
            goals,
            configs,
            entries,
            activities,
        })
    }

    pub fn scoped_goals<'a>(&'a self, scope: &'a GoalScope) -> impl Iterator<Item = &'a Goal> + 'a {
        scope.filter(&self.goals)
    }

    /// None when the goal has no configuration for the cycle. Without any
    /// cycle every goal is measured against no target.
    pub fn numeric_progress(&self, goal: &Goal) -> Option<GoalProgress> {
        match &self.cycle {
            Some(cycle) => compute_for_cycle(goal, cycle, &self.configs, &self.entries),
            None => Some(compute_goal_progress(goal, None, &self.entries)),
        }
    }

    pub fn goal_activities<'a>(&'a self, goal: &'a Goal) -> impl Iterator<Item = &'a Activity> + 'a {
        activities_for_goal(&goal.id, self.cycle.as_ref(), &self.activities)
    }

    pub fn activity_compliance(&self, goal: &Goal) -> ActivityCompliance {
        compute_activity_compliance(self.goal_activities(goal))
    }

    pub fn evaluate(&self, goal: &Goal) -> GoalEvaluation {
        GoalEvaluation {
            goal_id: goal.id.clone(),
            numeric: self.numeric_progress(goal),
            activity: self.activity_compliance(goal),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::compliance_state::ComplianceState;
    use rust_decimal_macros::dec;

    #[test]
    fn test_evaluate_sample_goals() {
        let data = fixtures::sample();

        let g1 = data.evaluate(&data.goals[0]);
        let numeric = g1.numeric.unwrap();
        assert_eq!(numeric.accumulated, dec!(0.45));
        assert_eq!(numeric.percentage, dec!(56.25));
        assert_eq!(numeric.state, ComplianceState::EnProgreso);
        assert_eq!(g1.activity.completed, 1);
        assert_eq!(g1.activity.total, 2);

        let g2 = data.evaluate(&data.goals[1]);
        assert_eq!(g2.numeric.unwrap().state, ComplianceState::Cumplida);

        assert!(data.evaluate(&data.goals[2]).numeric.is_none());
    }

    #[test]
    fn test_without_cycle_goals_have_no_target() {
        let mut data = fixtures::sample();
        data.cycle = None;
        data.configs.clear();

        let progress = data.numeric_progress(&data.goals[0]).unwrap();
        assert_eq!(progress.state, ComplianceState::SinMeta);
        assert_eq!(progress.percentage, dec!(0));
        assert_eq!(progress.accumulated, dec!(0.45));
    }
}
