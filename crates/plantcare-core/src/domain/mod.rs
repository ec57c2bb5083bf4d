//! # Plantcare Core - Domain Module
//! 
//! The persisted user record and the form inputs the screens submit.

pub mod user_record;
pub mod forms;

pub use user_record::{UserRecord, AuthenticatedUser};
pub use forms::{LoginForm, RegistrationForm};
