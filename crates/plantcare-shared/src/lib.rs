//! # Plantcare Shared
//! 
//! Shared constants, configuration, and telemetry for the plant-care account core.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
