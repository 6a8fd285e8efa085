use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for the seed operation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponseDto {
    pub message: String,
    /// Existing incident count when the store was already seeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cameras_created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incidents_created: Option<i64>,
}

impl SeedResponseDto {
    pub fn already_seeded(count: i64) -> Self {
        Self {
            message: "Database already seeded".to_string(),
            count: Some(count),
            cameras_created: None,
            incidents_created: None,
        }
    }

    pub fn seeded(cameras_created: i64, incidents_created: i64) -> Self {
        Self {
            message: "Database seeded successfully".to_string(),
            count: None,
            cameras_created: Some(cameras_created),
            incidents_created: Some(incidents_created),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_response_omits_existing_count() {
        let value = serde_json::to_value(SeedResponseDto::seeded(3, 29)).unwrap();

        assert_eq!(value["message"], "Database seeded successfully");
        assert_eq!(value["camerasCreated"], 3);
        assert_eq!(value["incidentsCreated"], 29);
        assert!(value.get("count").is_none());
    }

    #[test]
    fn already_seeded_response_only_reports_count() {
        let value = serde_json::to_value(SeedResponseDto::already_seeded(29)).unwrap();

        assert_eq!(value["message"], "Database already seeded");
        assert_eq!(value["count"], 29);
        assert!(value.get("camerasCreated").is_none());
        assert!(value.get("incidentsCreated").is_none());
    }
}
