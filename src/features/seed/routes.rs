use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::seed::handlers;
use crate::features::seed::services::SeedService;

/// Create routes for the seed feature
pub fn routes(service: Arc<SeedService>) -> Router {
    Router::new()
        .route("/seed", get(handlers::seed_database))
        .with_state(service)
}
