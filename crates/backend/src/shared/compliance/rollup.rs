use contracts::enums::compliance_signal::{ComplianceSignal, EmptyChildrenPolicy};
use contracts::enums::compliance_state::ComplianceState;
use contracts::shared::compliance::{ActivityCompliance, GoalProgress, RollUp, RollUpCounts};

/// Both signals of one goal, ready to be rolled up
#[derive(Debug, Clone)]
pub struct GoalEvaluation {
    pub goal_id: String,
    /// None when the goal has no configuration for the cycle
    pub numeric: Option<GoalProgress>,
    pub activity: ActivityCompliance,
}

impl GoalEvaluation {
    /// State under the signal, None when the goal has no data for it
    pub fn state_for(&self, signal: ComplianceSignal) -> Option<ComplianceState> {
        match signal {
            ComplianceSignal::Numeric => self.numeric.as_ref().map(|p| p.state),
            ComplianceSignal::Activity => {
                if self.activity.total > 0 {
                    Some(self.activity.state)
                } else {
                    None
                }
            }
        }
    }
}

/// Shared rule for every level.
///
/// `None` children have no data; the policy either leaves them out or counts
/// them as lagging. A node with nothing left to count is empty and Rezagada.
pub fn roll_up<I>(children: I, policy: EmptyChildrenPolicy) -> RollUp
where
    I: IntoIterator<Item = Option<ComplianceState>>,
{
    let mut counts = RollUpCounts::default();

    for child in children {
        let state = match (child, policy) {
            (Some(state), _) => state,
            (None, EmptyChildrenPolicy::Exclude) => {
                counts.excluded += 1;
                continue;
            }
            (None, EmptyChildrenPolicy::CountAsLagging) => ComplianceState::Rezagada,
        };

        counts.total += 1;
        match state {
            ComplianceState::Cumplida => counts.completed += 1,
            ComplianceState::EnProgreso => counts.in_progress += 1,
            ComplianceState::Rezagada | ComplianceState::SinMeta => counts.lagging += 1,
        }
    }
    counts.not_completed = counts.total - counts.completed;

    let state = if counts.total == 0 {
        ComplianceState::Rezagada
    } else if counts.completed == counts.total {
        ComplianceState::Cumplida
    } else if counts.completed + counts.in_progress == 0 {
        ComplianceState::Rezagada
    } else {
        ComplianceState::EnProgreso
    };

    RollUp {
        state,
        is_empty: counts.total == 0,
        counts,
    }
}

pub fn roll_up_project(
    goals: &[GoalEvaluation],
    signal: ComplianceSignal,
    policy: EmptyChildrenPolicy,
) -> RollUp {
    roll_up(goals.iter().map(|g| g.state_for(signal)), policy)
}

/// Objectives roll up their projects; empty projects count as no data
pub fn roll_up_objective(projects: &[RollUp], policy: EmptyChildrenPolicy) -> RollUp {
    roll_up(
        projects
            .iter()
            .map(|p| if p.is_empty { None } else { Some(p.state) }),
        policy,
    )
}

/// Adds counters of several nodes together
pub fn sum_counts<'a, I>(counts: I) -> RollUpCounts
where
    I: IntoIterator<Item = &'a RollUpCounts>,
{
    counts.into_iter().fold(RollUpCounts::default(), |mut acc, c| {
        acc.total += c.total;
        acc.completed += c.completed;
        acc.in_progress += c.in_progress;
        acc.lagging += c.lagging;
        acc.not_completed += c.not_completed;
        acc.excluded += c.excluded;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::compliance::ActivityCompliance;
    use rust_decimal::Decimal;

    use ComplianceState::*;

    fn numeric(goal_id: &str, state: Option<ComplianceState>) -> GoalEvaluation {
        GoalEvaluation {
            goal_id: goal_id.to_string(),
            numeric: state.map(|state| GoalProgress {
                accumulated: Decimal::ZERO,
                target: Some(Decimal::ONE),
                baseline: None,
                raw_percentage: Decimal::ZERO,
                percentage: Decimal::ZERO,
                state,
                entry_count: 0,
            }),
            activity: ActivityCompliance {
                state: Rezagada,
                completed: 0,
                total: 0,
                not_completed: 0,
                percentage: Decimal::ZERO,
                remaining: Decimal::ONE_HUNDRED,
            },
        }
    }

    const EXCLUDE: EmptyChildrenPolicy = EmptyChildrenPolicy::Exclude;

    #[test]
    fn test_met_and_lagging_goal_is_en_progreso() {
        let goals = vec![numeric("a", Some(Cumplida)), numeric("b", Some(Rezagada))];
        let result = roll_up_project(&goals, ComplianceSignal::Numeric, EXCLUDE);
        assert_eq!(result.state, EnProgreso);
        assert_eq!(result.counts.total, 2);
        assert_eq!(result.counts.completed, 1);
        assert_eq!(result.counts.not_completed, 1);
    }

    #[test]
    fn test_all_met_is_cumplida() {
        let goals = vec![numeric("a", Some(Cumplida)), numeric("b", Some(Cumplida))];
        assert_eq!(roll_up_project(&goals, ComplianceSignal::Numeric, EXCLUDE).state, Cumplida);
    }

    #[test]
    fn test_all_lagging_is_rezagada() {
        let goals = vec![numeric("a", Some(Rezagada)), numeric("b", Some(SinMeta))];
        let result = roll_up_project(&goals, ComplianceSignal::Numeric, EXCLUDE);
        assert_eq!(result.state, Rezagada);
        assert_eq!(result.counts.lagging, 2);
    }

    #[test]
    fn test_no_qualifying_goals_is_empty() {
        let goals = vec![numeric("a", None)];
        let result = roll_up_project(&goals, ComplianceSignal::Numeric, EXCLUDE);
        assert!(result.is_empty);
        assert_eq!(result.state, Rezagada);
        assert_eq!(result.counts.excluded, 1);
        assert_eq!(result.counts.total, 0);
    }

    #[test]
    fn test_goals_without_data_are_excluded_by_default() {
        let goals = vec![numeric("a", Some(Cumplida)), numeric("b", None)];
        let result = roll_up_project(&goals, ComplianceSignal::Numeric, EXCLUDE);
        assert_eq!(result.state, Cumplida);
        assert_eq!(result.counts.total, 1);
    }

    #[test]
    fn test_count_as_lagging_policy() {
        let goals = vec![numeric("a", Some(Cumplida)), numeric("b", None)];
        let result = roll_up_project(
            &goals,
            ComplianceSignal::Numeric,
            EmptyChildrenPolicy::CountAsLagging,
        );
        assert_eq!(result.state, EnProgreso);
        assert_eq!(result.counts.lagging, 1);
    }

    #[test]
    fn test_activity_signal_ignores_goals_without_activities() {
        let mut with_acts = numeric("a", Some(Rezagada));
        with_acts.activity.total = 2;
        with_acts.activity.completed = 2;
        with_acts.activity.state = Cumplida;
        let goals = vec![with_acts, numeric("b", Some(Rezagada))];

        let result = roll_up_project(&goals, ComplianceSignal::Activity, EXCLUDE);

        assert_eq!(result.state, Cumplida);
        assert_eq!(result.counts.excluded, 1);
    }

    #[test]
    fn test_empty_project_does_not_count_against_objective() {
        let met = roll_up(vec![Some(Cumplida)], EXCLUDE);
        let empty = roll_up(Vec::new(), EXCLUDE);

        let objective = roll_up_objective(&[met.clone(), empty.clone()], EXCLUDE);
        assert_eq!(objective.state, Cumplida);
        assert_eq!(objective.counts.total, 1);
        assert_eq!(objective.counts.excluded, 1);

        let strict = roll_up_objective(&[met, empty], EmptyChildrenPolicy::CountAsLagging);
        assert_eq!(strict.state, EnProgreso);
    }

    #[test]
    fn test_sum_counts() {
        let a = roll_up(vec![Some(Cumplida), Some(EnProgreso)], EXCLUDE);
        let b = roll_up(vec![Some(Rezagada), None], EXCLUDE);
        let total = sum_counts([&a.counts, &b.counts]);
        assert_eq!(total.total, 3);
        assert_eq!(total.completed, 1);
        assert_eq!(total.in_progress, 1);
        assert_eq!(total.lagging, 1);
        assert_eq!(total.excluded, 1);
    }
}
