use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::incidents::handlers;
use crate::features::incidents::services::IncidentService;

/// Create routes for the incidents feature
pub fn routes(service: Arc<IncidentService>) -> Router {
    Router::new()
        .route("/incidents", get(handlers::list_incidents))
        .route("/incidents/{id}", get(handlers::get_incident))
        .route("/incidents/{id}/resolve", patch(handlers::resolve_incident))
        .with_state(service)
}
