pub mod config;
pub mod error;
pub mod hotels;
pub mod telemetry;
