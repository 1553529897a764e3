use contracts::domain::a006_goal::Goal;
use contracts::domain::a008_progress_entry::{ProgressEntry, ProgressEntryInput};
use contracts::system::settings::CaptureWindow;
use thiserror::Error;
use uuid::Uuid;

use super::repository;
use crate::domain::{a006_goal, a007_goal_cycle_config};
use crate::shared::compliance::percent::{self, InputValueError};
use crate::shared::compliance::{can_register_progress, Actor};

#[derive(Debug, Error)]
pub enum ProgressInputError {
    #[error("{0}")]
    Value(#[from] InputValueError),

    #[error("Meta no encontrada: {0}")]
    GoalNotFound(String),

    #[error("La captura de avances está desactivada")]
    CaptureClosed,

    #[error("El rol {0} no puede registrar avances")]
    NotAllowed(&'static str),

    #[error("La meta no pertenece a su departamento")]
    OutOfScope,

    #[error("La meta no tiene configuración para el ciclo {0}")]
    MissingCycleConfig(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Checks an input against the goal and the caller, and builds the row to store
pub fn prepare_entry(
    goal: &Goal,
    input: &ProgressEntryInput,
    actor: &Actor,
    window: CaptureWindow,
    has_cycle_config: bool,
    id: String,
) -> Result<ProgressEntry, ProgressInputError> {
    if !can_register_progress(actor.role, window) {
        return Err(if window.capture_enabled {
            ProgressInputError::NotAllowed(actor.role.code())
        } else {
            ProgressInputError::CaptureClosed
        });
    }
    if !actor.scope().allows(goal) {
        return Err(ProgressInputError::OutOfScope);
    }

    percent::validate_input(input.value, goal.percentage)?;

    if !has_cycle_config {
        return Err(ProgressInputError::MissingCycleConfig(input.cycle_id.clone()));
    }

    Ok(ProgressEntry {
        id,
        goal_id: goal.id.clone(),
        cycle_id: Some(input.cycle_id.clone()),
        // The goal's department always wins; input only fills goals without one
        department_id: goal.department_id.clone().or_else(|| {
            input
                .department_id
                .clone()
                .filter(|d| !d.trim().is_empty())
        }),
        value: percent::from_input(input.value, goal.percentage),
        recorded_on: input.recorded_on,
    })
}

/// Registers a progress entry. `window` is read by the caller for this request.
pub async fn register(
    input: ProgressEntryInput,
    actor: &Actor,
    window: CaptureWindow,
) -> Result<ProgressEntry, ProgressInputError> {
    let goal = a006_goal::repository::get_by_id(&input.goal_id)
        .await?
        .ok_or_else(|| ProgressInputError::GoalNotFound(input.goal_id.clone()))?;

    let has_cycle_config = a007_goal_cycle_config::repository::find(&goal.id, &input.cycle_id)
        .await?
        .is_some();

    let entry = prepare_entry(
        &goal,
        &input,
        actor,
        window,
        has_cycle_config,
        Uuid::new_v4().to_string(),
    )?;
    repository::insert(&entry).await?;

    tracing::info!(
        "Progress entry {} registered for goal '{}' ({} stored) by {}",
        entry.id,
        goal.key,
        entry.value,
        actor.role.code()
    );
    Ok(entry)
}
