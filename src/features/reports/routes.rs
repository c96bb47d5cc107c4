use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Both endpoints are public (no authentication exists anywhere in the
/// service); CORS is applied by the caller.
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/report", post(handlers::create_report))
        .route("/reports", get(handlers::list_reports))
        .with_state(service)
}
