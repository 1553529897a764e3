use axum::{extract::Query, Json};
use contracts::dashboards::d400_goal_tracking::{GoalTrackingRequest, GoalTrackingResponse};

use crate::dashboards::d400_goal_tracking::service;

/// GET /api/d400/goal-tracking?cycle_id=...&view=simple&role=DOCENTE&user_department_id=...
pub async fn get_goal_tracking(
    Query(request): Query<GoalTrackingRequest>,
) -> Json<GoalTrackingResponse> {
    tracing::info!(
        "D400 Dashboard: goal tracking for cycle {:?} as {}",
        request.cycle_id,
        request.role.code()
    );

    match service::get_goal_tracking(request).await {
        Ok(response) => {
            tracing::info!(
                "D400 Dashboard: Returning {} goals over {} months",
                response.rows.len(),
                response.months.len()
            );
            Json(response)
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to build goal tracking: {:#}", e);
            Json(GoalTrackingResponse::empty())
        }
    }
}
