use axum::{http::StatusCode, Json};
use contracts::domain::a007_goal_cycle_config::{GoalCycleConfig, GoalCycleConfigInput};
use contracts::enums::user_role::UserRole;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::a007_goal_cycle_config::service::{self, ConfigInputError};

#[derive(Debug, Deserialize)]
pub struct SaveConfigRequest {
    pub role: UserRole,
    pub config: GoalCycleConfigInput,
}

fn status_for(error: &ConfigInputError) -> StatusCode {
    match error {
        ConfigInputError::GoalNotFound(_) | ConfigInputError::CycleNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        ConfigInputError::Baseline(_) | ConfigInputError::Target(_) => StatusCode::BAD_REQUEST,
        ConfigInputError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// POST /api/a007/goal-cycle-config
pub async fn save(
    Json(request): Json<SaveConfigRequest>,
) -> Result<Json<GoalCycleConfig>, (StatusCode, Json<Value>)> {
    if !matches!(request.role, UserRole::Admin | UserRole::Apoyo) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Solo ADMIN o APOYO pueden configurar metas" })),
        ));
    }

    service::save_config(request.config).await.map(Json).map_err(|e| {
        let status = status_for(&e);
        if status.is_server_error() {
            tracing::error!("A007: Failed to save goal cycle config: {:#}", e);
        } else {
            tracing::warn!("A007: Rejected goal cycle config: {}", e);
        }
        (status, Json(json!({ "error": e.to_string() })))
    })
}
