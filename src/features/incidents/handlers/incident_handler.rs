use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::Result;
use crate::features::incidents::dtos::IncidentResponseDto;
use crate::features::incidents::services::IncidentService;
use crate::shared::types::ErrorBody;
use crate::shared::validation::parse_positive_id;

/// Query params for listing incidents
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListIncidentsQuery {
    /// Filter by resolution state; omit to list everything
    pub resolved: Option<bool>,
}

/// List incidents with their cameras, newest first
#[utoipa::path(
    get,
    path = "/incidents",
    params(ListIncidentsQuery),
    responses(
        (status = 200, description = "List of incidents", body = Vec<IncidentResponseDto>),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "incidents"
)]
pub async fn list_incidents(
    State(service): State<Arc<IncidentService>>,
    Query(query): Query<ListIncidentsQuery>,
) -> Result<Json<Vec<IncidentResponseDto>>> {
    let incidents = service.list(query.resolved).await?;
    Ok(Json(incidents))
}

/// Get a single incident by id
#[utoipa::path(
    get,
    path = "/incidents/{id}",
    params(
        ("id" = String, Path, description = "Incident id (positive integer)")
    ),
    responses(
        (status = 200, description = "Incident found", body = IncidentResponseDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Incident not found", body = ErrorBody)
    ),
    tag = "incidents"
)]
pub async fn get_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
) -> Result<Json<IncidentResponseDto>> {
    let id = parse_positive_id(&id)?;
    let incident = service.get_by_id(id).await?;
    Ok(Json(incident))
}

/// Mark an incident resolved
///
/// Idempotent: resolving an already-resolved incident succeeds and
/// returns the record unchanged.
#[utoipa::path(
    patch,
    path = "/incidents/{id}/resolve",
    params(
        ("id" = String, Path, description = "Incident id (positive integer)")
    ),
    responses(
        (status = 200, description = "Updated incident", body = IncidentResponseDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Incident not found", body = ErrorBody)
    ),
    tag = "incidents"
)]
pub async fn resolve_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
) -> Result<Json<IncidentResponseDto>> {
    let id = parse_positive_id(&id)?;
    let incident = service.resolve(id).await?;
    Ok(Json(incident))
}
