use utoipa::{Modify, OpenApi};

use crate::features::cameras::{dtos as cameras_dtos, handlers as cameras_handlers};
use crate::features::incidents::{dtos as incidents_dtos, handlers as incidents_handlers};
use crate::features::seed::{dtos as seed_dtos, handlers as seed_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cameras
        cameras_handlers::camera_handler::list_cameras,
        // Incidents
        incidents_handlers::incident_handler::list_incidents,
        incidents_handlers::incident_handler::get_incident,
        incidents_handlers::incident_handler::resolve_incident,
        // Seed
        seed_handlers::seed_handler::seed_database,
    ),
    components(schemas(
        cameras_dtos::CameraResponseDto,
        cameras_dtos::CameraIncidentDto,
        incidents_dtos::IncidentResponseDto,
        incidents_dtos::CameraRefDto,
        seed_dtos::SeedResponseDto,
        ErrorBody,
    )),
    tags(
        (name = "cameras", description = "Camera listing"),
        (name = "incidents", description = "Incident queries and resolution"),
        (name = "seed", description = "Demonstration data")
    )
)]
pub struct ApiDoc;

/// Overrides the OpenAPI info section from runtime configuration
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
