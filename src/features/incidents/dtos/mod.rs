pub mod incident_dto;

pub use incident_dto::{CameraRefDto, IncidentResponseDto};
