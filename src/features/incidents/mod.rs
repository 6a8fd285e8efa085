//! Security incident feature: listing, lookup and the one-way resolve
//! transition.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/incidents` | List incidents, optional `resolved` filter, newest first |
//! | GET | `/incidents/{id}` | Single incident with its camera |
//! | PATCH | `/incidents/{id}/resolve` | Mark an incident resolved |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::IncidentService;
