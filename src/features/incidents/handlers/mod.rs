pub mod incident_handler;

pub use incident_handler::{get_incident, list_incidents, resolve_incident};
