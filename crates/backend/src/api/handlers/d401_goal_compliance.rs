use axum::{extract::Query, Json};
use contracts::dashboards::d401_goal_compliance::{GoalComplianceRequest, GoalComplianceResponse};

use crate::dashboards::d401_goal_compliance::service;
use crate::shared::config::compliance_settings;

/// GET /api/d401/goal-compliance?cycle_id=...&department_id=...&signal=activity&role=ADMIN
pub async fn get_goal_compliance(
    Query(request): Query<GoalComplianceRequest>,
) -> Json<GoalComplianceResponse> {
    let signal = request
        .signal
        .unwrap_or(compliance_settings().default_signal);

    match service::get_goal_compliance(request, signal).await {
        Ok(response) => {
            tracing::info!(
                "D401 Dashboard: {} goals, {} completed, overall {:?}",
                response.rows.len(),
                response.stats.completed,
                response.summary.overall
            );
            Json(response)
        }
        Err(e) => {
            tracing::error!("D401 Dashboard: Failed to build goal compliance: {:#}", e);
            Json(GoalComplianceResponse::empty(signal))
        }
    }
}
