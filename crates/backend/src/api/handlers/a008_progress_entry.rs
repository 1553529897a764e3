use axum::{http::StatusCode, Json};
use contracts::domain::a008_progress_entry::{ProgressEntry, ProgressEntryInput};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::a008_progress_entry::service::{self, ProgressInputError};
use crate::shared::compliance::Actor;
use crate::system::settings::repository as settings;

#[derive(Debug, Deserialize)]
pub struct RegisterProgressRequest {
    pub actor: Actor,
    pub entry: ProgressEntryInput,
}

fn status_for(error: &ProgressInputError) -> StatusCode {
    match error {
        ProgressInputError::Value(_) => StatusCode::BAD_REQUEST,
        ProgressInputError::GoalNotFound(_) => StatusCode::NOT_FOUND,
        ProgressInputError::CaptureClosed
        | ProgressInputError::NotAllowed(_)
        | ProgressInputError::OutOfScope => StatusCode::FORBIDDEN,
        ProgressInputError::MissingCycleConfig(_) => StatusCode::CONFLICT,
        ProgressInputError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_body(status: StatusCode, message: String) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

/// POST /api/a008/progress-entry
///
/// The capture window is read once per request and handed to the service.
pub async fn register(
    Json(request): Json<RegisterProgressRequest>,
) -> Result<Json<ProgressEntry>, (StatusCode, Json<Value>)> {
    let window = settings::get_capture_window().await.map_err(|e| {
        tracing::error!("A008: Failed to read capture window: {:#}", e);
        error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    service::register(request.entry, &request.actor, window)
        .await
        .map(Json)
        .map_err(|e| {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!("A008: Failed to register progress: {:#}", e);
            } else {
                tracing::warn!("A008: Rejected progress entry: {}", e);
            }
            error_body(status, e.to_string())
        })
}
