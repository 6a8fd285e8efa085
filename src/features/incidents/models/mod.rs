pub mod incident;

pub use incident::{Incident, IncidentWithCamera};
