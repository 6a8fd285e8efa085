pub mod cameras;
pub mod incidents;
pub mod seed;
