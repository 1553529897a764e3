use contracts::domain::a006_goal::Goal;
use contracts::domain::a007_goal_cycle_config::{GoalCycleConfig, GoalCycleConfigInput};
use thiserror::Error;
use uuid::Uuid;

use super::repository;
use crate::domain::{a003_cycle, a006_goal};
use crate::shared::compliance::percent::{self, InputValueError};

#[derive(Debug, Error)]
pub enum ConfigInputError {
    #[error("Meta no encontrada: {0}")]
    GoalNotFound(String),

    #[error("Ciclo no encontrado: {0}")]
    CycleNotFound(String),

    #[error("Línea base: {0}")]
    Baseline(InputValueError),

    #[error("Meta a cumplir: {0}")]
    Target(InputValueError),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Validates typed values and converts them to stored units
pub fn prepare_config(
    goal: &Goal,
    input: &GoalCycleConfigInput,
    id: String,
) -> Result<GoalCycleConfig, ConfigInputError> {
    let convert = |value: Option<rust_decimal::Decimal>| -> Result<_, InputValueError> {
        match value {
            Some(v) => {
                percent::validate_input(v, goal.percentage)?;
                Ok(Some(percent::from_input(v, goal.percentage)))
            }
            None => Ok(None),
        }
    };

    Ok(GoalCycleConfig {
        id,
        goal_id: goal.id.clone(),
        cycle_id: input.cycle_id.clone(),
        baseline: convert(input.baseline).map_err(ConfigInputError::Baseline)?,
        target: convert(input.target).map_err(ConfigInputError::Target)?,
    })
}

/// Creates or replaces the configuration of a goal for a cycle
pub async fn save_config(input: GoalCycleConfigInput) -> Result<GoalCycleConfig, ConfigInputError> {
    let goal = a006_goal::repository::get_by_id(&input.goal_id)
        .await?
        .ok_or_else(|| ConfigInputError::GoalNotFound(input.goal_id.clone()))?;
    if a003_cycle::repository::get_by_id(&input.cycle_id).await?.is_none() {
        return Err(ConfigInputError::CycleNotFound(input.cycle_id.clone()));
    }

    let id = repository::find(&input.goal_id, &input.cycle_id)
        .await?
        .map(|existing| existing.id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let config = prepare_config(&goal, &input, id)?;
    let inserted = repository::upsert(&config).await?;
    tracing::info!(
        "Goal cycle config {} for goal '{}' in cycle '{}'",
        if inserted { "created" } else { "updated" },
        goal.key,
        config.cycle_id
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::compliance::goal_progress::fixtures::goal;
    use rust_decimal_macros::dec;

    fn input(baseline: Option<rust_decimal::Decimal>, target: Option<rust_decimal::Decimal>) -> GoalCycleConfigInput {
        GoalCycleConfigInput {
            goal_id: "g1".to_string(),
            cycle_id: "c1".to_string(),
            baseline,
            target,
        }
    }

    #[test]
    fn test_percentage_config_is_stored_as_fraction() {
        let g = goal("g1", false, true);
        let config = prepare_config(&g, &input(Some(dec!(20)), Some(dec!(80))), "id".into()).unwrap();
        assert_eq!(config.baseline, Some(dec!(0.2)));
        assert_eq!(config.target, Some(dec!(0.8)));
    }

    #[test]
    fn test_absolute_config_is_stored_as_typed() {
        let g = goal("g1", false, false);
        let config = prepare_config(&g, &input(None, Some(dec!(250))), "id".into()).unwrap();
        assert_eq!(config.baseline, None);
        assert_eq!(config.target, Some(dec!(250)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let pct = goal("g1", false, true);
        let err = prepare_config(&pct, &input(None, Some(dec!(120))), "id".into()).unwrap_err();
        assert!(matches!(err, ConfigInputError::Target(InputValueError::AbovePercentCeiling)));

        let abs = goal("g1", false, false);
        let err = prepare_config(&abs, &input(Some(dec!(-1)), None), "id".into()).unwrap_err();
        assert!(matches!(err, ConfigInputError::Baseline(InputValueError::Negative)));
    }
}
