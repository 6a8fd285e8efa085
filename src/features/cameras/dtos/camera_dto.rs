use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::cameras::models::Camera;
use crate::features::incidents::models::Incident;

/// Incident embedded in a camera response (no camera back-reference)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CameraIncidentDto {
    pub id: i32,
    pub camera_id: i32,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub ts_start: DateTime<Utc>,
    pub ts_end: DateTime<Utc>,
    pub thumbnail_url: String,
    pub resolved: bool,
}

impl From<Incident> for CameraIncidentDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            camera_id: i.camera_id,
            incident_type: i.incident_type,
            ts_start: i.ts_start,
            ts_end: i.ts_end,
            thumbnail_url: i.thumbnail_url,
            resolved: i.resolved,
        }
    }
}

/// Response DTO for a camera with its incident collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CameraResponseDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub incidents: Vec<CameraIncidentDto>,
}

impl CameraResponseDto {
    /// Group flat incident rows under their owning cameras.
    ///
    /// Cameras without incidents get an empty collection; incidents keep
    /// the order they were fetched in.
    pub fn group(cameras: Vec<Camera>, incidents: Vec<Incident>) -> Vec<CameraResponseDto> {
        let mut by_camera: HashMap<i32, Vec<CameraIncidentDto>> = HashMap::new();
        for incident in incidents {
            by_camera
                .entry(incident.camera_id)
                .or_default()
                .push(incident.into());
        }

        cameras
            .into_iter()
            .map(|camera| CameraResponseDto {
                incidents: by_camera.remove(&camera.id).unwrap_or_default(),
                id: camera.id,
                name: camera.name,
                location: camera.location,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn camera(id: i32, name: &str) -> Camera {
        Camera {
            id,
            name: name.to_string(),
            location: "Main Building Ground Floor".to_string(),
        }
    }

    fn incident(id: i32, camera_id: i32) -> Incident {
        let ts_start = Utc.with_ymd_and_hms(2025, 6, 15, 3, 0, 0).unwrap();
        Incident {
            id,
            camera_id,
            incident_type: "Unauthorised Access".to_string(),
            ts_start,
            ts_end: ts_start + chrono::Duration::hours(1),
            thumbnail_url: "/incidents/unauthorised.jpg".to_string(),
            resolved: false,
        }
    }

    #[test]
    fn groups_incidents_under_their_camera() {
        let cameras = vec![camera(1, "Shop Floor Camera A"), camera(2, "Camera - 02")];
        let incidents = vec![incident(10, 1), incident(11, 2), incident(12, 1)];

        let grouped = CameraResponseDto::group(cameras, incidents);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, 1);
        assert_eq!(
            grouped[0].incidents.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
        assert_eq!(grouped[1].incidents.len(), 1);
        assert_eq!(grouped[1].incidents[0].id, 11);
    }

    #[test]
    fn camera_without_incidents_gets_empty_collection() {
        let grouped = CameraResponseDto::group(vec![camera(3, "Camera - 03")], vec![]);

        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].incidents.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let grouped = CameraResponseDto::group(vec![camera(1, "Shop Floor Camera A")], vec![incident(10, 1)]);
        let value = serde_json::to_value(&grouped).unwrap();

        assert_eq!(value[0]["name"], "Shop Floor Camera A");
        assert_eq!(value[0]["incidents"][0]["cameraId"], 1);
        assert_eq!(value[0]["incidents"][0]["type"], "Unauthorised Access");
        assert!(value[0]["incidents"][0].get("camera").is_none());
    }
}
