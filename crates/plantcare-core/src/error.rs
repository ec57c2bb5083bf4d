//! Domain errors
//!
//! Validation and credential errors are shown to the user as a single
//! message. Storage errors abort the flow and are surfaced as-is.

use thiserror::Error;

/// Failures of the local record store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Please fill in all the fields.")]
    MissingFields,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("Invalid phone number (9-12 digits).")]
    InvalidPhone,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("Password confirmation does not match.")]
    PasswordMismatch,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RegisterError {
    /// Whether the user can fix this by editing the form.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Please fill in your email and password.")]
    MissingFields,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("No account found, please register first.")]
    NoAccount,

    #[error("Wrong email or password!")]
    BadCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoginError {
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_are_not_user_facing() {
        let err = LoginError::from(StorageError::Unavailable("disk gone".to_string()));
        assert!(!err.is_user_facing());
        assert_eq!(err.to_string(), "Storage unavailable: disk gone");

        let err = RegisterError::from(StorageError::Corrupt("eof".to_string()));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_validation_errors_are_user_facing() {
        assert!(RegisterError::PasswordMismatch.is_user_facing());
        assert!(LoginError::BadCredentials.is_user_facing());
    }
}
