// ============================================================================
// Plantcare Core - Authentication Service
// File: crates/plantcare-core/src/services/auth_service.rs
// ============================================================================
//! Registration and login against the single locally stored user record.

use std::sync::Arc;

use plantcare_shared::utils::mask_email;
use tracing::{error, info, warn};

use crate::domain::{AuthenticatedUser, LoginForm, RegistrationForm, UserRecord};
use crate::error::{LoginError, RegisterError};
use crate::repositories::{read_user_record, write_user_record, RecordStore};
use crate::signal::SessionSignal;
use crate::validation;

/// Authentication service for the register/login screens
pub struct AuthService<S: RecordStore> {
    store: Arc<S>,
    session: Arc<dyn SessionSignal>,
}

impl<S: RecordStore> AuthService<S> {
    pub fn new(store: Arc<S>, session: Arc<dyn SessionSignal>) -> Self {
        Self { store, session }
    }

    /// Validate the form and store it as the device's only account.
    ///
    /// Any earlier record is replaced. Nothing is written when validation fails.
    pub async fn register(&self, form: &RegistrationForm) -> Result<UserRecord, RegisterError> {
        let masked = mask_email(&form.email);
        info!("Registration attempt for email: {}", masked);

        if let Err(e) = validation::check_registration(form) {
            warn!("Registration rejected for {}: {:?}", masked, e);
            return Err(e);
        }

        let record = UserRecord::from(form);
        write_user_record(self.store.as_ref(), &record)
            .await
            .map_err(|e| {
                error!("Failed to store user record: {}", e);
                RegisterError::Storage(e)
            })?;

        info!("Registration successful for: {}", masked);
        Ok(record)
    }

    /// Compare the submitted credentials with the stored record.
    ///
    /// On a match the session signal fires once with the email.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthenticatedUser, LoginError> {
        let masked = mask_email(&form.email);
        info!("Login attempt for email: {}", masked);

        if let Err(e) = validation::check_login(form) {
            warn!("Login rejected for {}: {:?}", masked, e);
            return Err(e);
        }

        // 1. Load the one stored record
        let stored = read_user_record(self.store.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to read user record: {}", e);
                LoginError::Storage(e)
            })?
            .ok_or_else(|| {
                warn!("Login failed: no account registered");
                LoginError::NoAccount
            })?;

        // 2. Compare credentials
        if !stored.matches(&form.email, &form.password) {
            warn!("Login failed: bad credentials for: {}", masked);
            return Err(LoginError::BadCredentials);
        }

        self.session.authenticated(&form.email);
        info!("Login successful for: {}", masked);

        Ok(AuthenticatedUser {
            email: form.email.clone(),
        })
    }
}
