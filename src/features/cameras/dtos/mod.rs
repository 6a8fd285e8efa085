pub mod camera_dto;

pub use camera_dto::{CameraIncidentDto, CameraResponseDto};
