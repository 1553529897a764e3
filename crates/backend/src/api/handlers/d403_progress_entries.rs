use axum::{extract::Query, Json};
use contracts::dashboards::d403_progress_entries::{ProgressReportRequest, ProgressReportResponse};

use crate::dashboards::d403_progress_entries::service;

/// GET /api/d403/progress-entries?department_id=...&role=ADMIN
pub async fn get_progress_entries(
    Query(request): Query<ProgressReportRequest>,
) -> Json<ProgressReportResponse> {
    match service::get_progress_entries(request).await {
        Ok(response) => {
            tracing::info!("D403 Report: Returning {} progress entries", response.rows.len());
            Json(response)
        }
        Err(e) => {
            tracing::error!("D403 Report: Failed to list progress entries: {:#}", e);
            Json(ProgressReportResponse::empty())
        }
    }
}
