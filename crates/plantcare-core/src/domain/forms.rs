//! Form inputs submitted by the login and registration screens

/// Values typed into the registration screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// Values typed into the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
