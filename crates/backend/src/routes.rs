use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DATA ENTRY
        // ========================================
        .route(
            "/api/a007/goal-cycle-config",
            post(handlers::a007_goal_cycle_config::save),
        )
        .route(
            "/api/a008/progress-entry",
            post(handlers::a008_progress_entry::register),
        )
        .route(
            "/api/system/settings/capture",
            get(handlers::sys_settings::get_capture).put(handlers::sys_settings::put_capture),
        )
        // ========================================
        // DASHBOARDS AND REPORTS
        // ========================================
        .route(
            "/api/d400/goal-tracking",
            get(handlers::d400_goal_tracking::get_goal_tracking),
        )
        .route(
            "/api/d401/goal-compliance",
            get(handlers::d401_goal_compliance::get_goal_compliance),
        )
        .route("/api/d402/rollup", get(handlers::d402_rollup::get_rollup))
        .route(
            "/api/d403/progress-entries",
            get(handlers::d403_progress_entries::get_progress_entries),
        )
        .route(
            "/api/d404/risks",
            get(handlers::d404_risk_summary::get_risk_report),
        )
}
