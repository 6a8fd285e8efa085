pub mod seed_handler;

pub use seed_handler::seed_database;
