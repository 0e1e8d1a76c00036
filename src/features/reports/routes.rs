use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/v1/get_report/{report_id}", get(handlers::get_report))
        .route("/api/v1/set_report", post(handlers::set_report))
        .route(
            "/api/v1/get_observation_time/{model_id}",
            get(handlers::get_observation_time),
        )
        .with_state(service)
}
