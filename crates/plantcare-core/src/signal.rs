//! Application session signal (port)

/// Told once per successful login, carrying the signed-in email.
#[cfg_attr(test, mockall::automock)]
pub trait SessionSignal: Send + Sync {
    fn authenticated(&self, email: &str);
}
