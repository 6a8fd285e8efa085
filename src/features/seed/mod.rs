//! Demonstration-data seeding for development and demos.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/seed` | Populate demo cameras/incidents (idempotent) |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SeedService;
