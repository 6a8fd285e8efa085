use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::seed::dtos::SeedResponseDto;
use crate::features::seed::services::SeedService;
use crate::shared::types::ErrorBody;

/// Populate the store with demonstration cameras and incidents
///
/// Idempotent: a second call reports the existing incident count and
/// inserts nothing.
#[utoipa::path(
    get,
    path = "/seed",
    responses(
        (status = 200, description = "Seed outcome", body = SeedResponseDto),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "seed"
)]
pub async fn seed_database(
    State(service): State<Arc<SeedService>>,
) -> Result<Json<SeedResponseDto>> {
    let outcome = service.seed().await?;
    Ok(Json(outcome))
}
