use axum::{extract::Query, Json};
use contracts::dashboards::d402_rollup::{RollUpRequest, RollUpResponse};

use crate::dashboards::d402_rollup::service;
use crate::shared::config::compliance_settings;

/// GET /api/d402/rollup?cycle_id=...&signal=numeric&empty_children=exclude&role=APOYO
pub async fn get_rollup(Query(request): Query<RollUpRequest>) -> Json<RollUpResponse> {
    let settings = compliance_settings();
    let signal = request.signal.unwrap_or(settings.default_signal);
    let policy = request.empty_children.unwrap_or(settings.empty_children);

    match service::get_rollup(request).await {
        Ok(response) => {
            tracing::info!(
                "D402 Dashboard: {} objectives, {} goals counted",
                response.objectives.len(),
                response.goal_totals.total
            );
            Json(response)
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to build roll-up: {:#}", e);
            Json(RollUpResponse::empty(signal, policy))
        }
    }
}
