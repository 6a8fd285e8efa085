use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::cameras::dtos::CameraResponseDto;
use crate::features::cameras::services::CameraService;
use crate::shared::types::ErrorBody;

/// List all cameras with their incidents
#[utoipa::path(
    get,
    path = "/cameras",
    responses(
        (status = 200, description = "List of cameras", body = Vec<CameraResponseDto>),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "cameras"
)]
pub async fn list_cameras(
    State(service): State<Arc<CameraService>>,
) -> Result<Json<Vec<CameraResponseDto>>> {
    let cameras = service.list_all().await?;
    Ok(Json(cameras))
}
