use axum::{http::StatusCode, Json};
use contracts::enums::user_role::UserRole;
use contracts::system::settings::CaptureWindow;
use serde::Deserialize;

use crate::system::settings::repository;

#[derive(Debug, Deserialize)]
pub struct UpdateCaptureRequest {
    pub role: UserRole,
    pub capture_enabled: bool,
}

/// GET /api/system/settings/capture
pub async fn get_capture() -> Result<Json<CaptureWindow>, StatusCode> {
    repository::get_capture_window().await.map(Json).map_err(|e| {
        tracing::error!("Failed to read capture window: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// PUT /api/system/settings/capture (ADMIN only)
pub async fn put_capture(
    Json(request): Json<UpdateCaptureRequest>,
) -> Result<Json<CaptureWindow>, StatusCode> {
    if request.role != UserRole::Admin {
        tracing::warn!("Capture toggle refused for role {}", request.role.code());
        return Err(StatusCode::FORBIDDEN);
    }

    let window = CaptureWindow {
        capture_enabled: request.capture_enabled,
    };
    repository::set_capture_window(window).await.map_err(|e| {
        tracing::error!("Failed to update capture window: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(window))
}
