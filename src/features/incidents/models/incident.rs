use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an incident row
#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: i32,
    pub camera_id: i32,
    #[sqlx(rename = "type")]
    pub incident_type: String,
    pub ts_start: DateTime<Utc>,
    pub ts_end: DateTime<Utc>,
    pub thumbnail_url: String,
    pub resolved: bool,
}

/// Incident row joined with its owning camera
#[derive(Debug, Clone, FromRow)]
pub struct IncidentWithCamera {
    pub id: i32,
    pub camera_id: i32,
    #[sqlx(rename = "type")]
    pub incident_type: String,
    pub ts_start: DateTime<Utc>,
    pub ts_end: DateTime<Utc>,
    pub thumbnail_url: String,
    pub resolved: bool,
    pub camera_name: String,
    pub camera_location: String,
}
