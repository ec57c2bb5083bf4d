// ============================================================================
// Plantcare Core - User Record Entity
// File: crates/plantcare-core/src/domain/user_record.rs
// Description: The single account record kept in the local store
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::domain::RegistrationForm;

/// The one account record on the device.
///
/// Serialized with the field names `fullName`, `email`, `phone`, `password`.
/// The password is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(full_name: String, email: String, phone: String, password: String) -> Self {
        Self {
            full_name,
            email,
            phone,
            password,
        }
    }

    /// Exact, case-sensitive comparison of both credentials.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl From<&RegistrationForm> for UserRecord {
    fn from(form: &RegistrationForm) -> Self {
        Self::new(
            form.full_name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.password.clone(),
        )
    }
}

/// Returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord::new(
            "Lan Nguyen".to_string(),
            "lan@garden.vn".to_string(),
            "0912345678".to_string(),
            "monstera".to_string(),
        )
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["fullName"], "Lan Nguyen");
        assert_eq!(json["email"], "lan@garden.vn");
        assert_eq!(json["phone"], "0912345678");
        assert_eq!(json["password"], "monstera");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_reads_record_with_only_credentials() {
        let parsed: UserRecord =
            serde_json::from_str(r#"{"email":"lan@garden.vn","password":"monstera"}"#).unwrap();
        assert!(parsed.full_name.is_empty());
        assert!(parsed.matches("lan@garden.vn", "monstera"));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let user = record();
        assert!(user.matches("lan@garden.vn", "monstera"));
        assert!(!user.matches("Lan@garden.vn", "monstera"));
        assert!(!user.matches("lan@garden.vn", "Monstera"));
    }
}
