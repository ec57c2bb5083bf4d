//! # Plantcare Core
//! 
//! Domain entities, validation rules, services, and port traits behind the
//! login and registration screens.

pub mod domain;
pub mod validation;
pub mod services;
pub mod repositories;
pub mod signal;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{LoginError, RegisterError, StorageError};
pub use repositories::RecordStore;
pub use services::AuthService;
pub use signal::SessionSignal;
