pub mod camera_handler;

pub use camera_handler::list_cameras;
