use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d404_risk_summary::RiskReportResponse;
use contracts::enums::user_role::UserRole;
use serde::Deserialize;

use crate::dashboards::d404_risk_summary::service;

#[derive(Debug, Deserialize)]
pub struct RiskQuery {
    pub role: UserRole,
}

/// GET /api/d404/risks?role=ADMIN
///
/// Only ADMIN and APOYO may read the risk report.
pub async fn get_risk_report(
    Query(query): Query<RiskQuery>,
) -> Result<Json<RiskReportResponse>, StatusCode> {
    if !matches!(query.role, UserRole::Admin | UserRole::Apoyo) {
        tracing::warn!("D404 Report: role {} is not allowed", query.role.code());
        return Err(StatusCode::FORBIDDEN);
    }

    match service::get_risk_report().await {
        Ok(response) => {
            tracing::info!("D404 Report: Returning {} risks", response.total_risks);
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D404 Report: Failed to build risk report: {:#}", e);
            Ok(Json(RiskReportResponse::empty()))
        }
    }
}
