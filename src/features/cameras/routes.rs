use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cameras::handlers;
use crate::features::cameras::services::CameraService;

/// Create routes for the cameras feature
pub fn routes(service: Arc<CameraService>) -> Router {
    Router::new()
        .route("/cameras", get(handlers::list_cameras))
        .with_state(service)
}
