use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::incidents::models::IncidentWithCamera;

/// Camera details embedded in an incident response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CameraRefDto {
    pub id: i32,
    pub name: String,
    pub location: String,
}

/// Response DTO for an incident with its camera embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResponseDto {
    pub id: i32,
    pub camera_id: i32,
    /// Open-ended type label, e.g. "Gun Threat", "Unauthorised Access"
    #[serde(rename = "type")]
    pub incident_type: String,
    pub ts_start: DateTime<Utc>,
    pub ts_end: DateTime<Utc>,
    pub thumbnail_url: String,
    pub resolved: bool,
    pub camera: CameraRefDto,
}

impl From<IncidentWithCamera> for IncidentResponseDto {
    fn from(row: IncidentWithCamera) -> Self {
        Self {
            id: row.id,
            camera_id: row.camera_id,
            incident_type: row.incident_type,
            ts_start: row.ts_start,
            ts_end: row.ts_end,
            thumbnail_url: row.thumbnail_url,
            resolved: row.resolved,
            camera: CameraRefDto {
                id: row.camera_id,
                name: row.camera_name,
                location: row.camera_location,
            },
        }
    }
}
