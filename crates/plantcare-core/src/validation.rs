// ============================================================================
// Plantcare Core - Field Validation
// File: crates/plantcare-core/src/validation.rs
// ============================================================================
//! Side-effect-free checks run on form input before any storage access.

use std::sync::LazyLock;

use regex::Regex;

use plantcare_shared::constants::{MAX_PHONE_DIGITS, MIN_PASSWORD_LENGTH, MIN_PHONE_DIGITS};

use crate::domain::{LoginForm, RegistrationForm};
use crate::error::{LoginError, RegisterError};

// Unanchored: any substring of the shape `x@y.z` is enough.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// ASCII digits only, 9 to 12 of them.
pub fn is_valid_phone(value: &str) -> bool {
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
}

/// At least six characters, any charset.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LENGTH
}

/// True when no field is the empty string. Whitespace-only input counts as present.
pub fn fields_present(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.is_empty())
}

/// Registration rules in order; the first violated rule is returned.
pub fn check_registration(form: &RegistrationForm) -> Result<(), RegisterError> {
    if !fields_present(&[
        form.full_name.as_str(),
        form.email.as_str(),
        form.phone.as_str(),
        form.password.as_str(),
        form.confirm_password.as_str(),
    ]) {
        return Err(RegisterError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(RegisterError::InvalidEmail);
    }
    if !is_valid_phone(&form.phone) {
        return Err(RegisterError::InvalidPhone);
    }
    if !is_valid_password(&form.password) {
        return Err(RegisterError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(RegisterError::PasswordMismatch);
    }
    Ok(())
}

/// Login input checks that need no stored data.
pub fn check_login(form: &LoginForm) -> Result<(), LoginError> {
    if !fields_present(&[form.email.as_str(), form.password.as_str()]) {
        return Err(LoginError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(LoginError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm::new("A", "a@b.com", "123456789", "secret1", "secret1")
    }

    #[test]
    fn test_email_accepts_minimal_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("lan.nguyen@garden.com.vn"));
    }

    #[test]
    fn test_email_is_unanchored() {
        assert!(is_valid_email("  mail me at a@b.c please"));
    }

    #[test]
    fn test_email_rejects_missing_parts() {
        for value in ["", "ab.c", "a@bc", "@b.c", "a@.c", "a@b.", "a @b.c", "a@b .c"] {
            assert!(!is_valid_email(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(is_valid_phone("123456789"));
        assert!(is_valid_phone("123456789012"));
        assert!(!is_valid_phone("12345678"));
        assert!(!is_valid_phone("1234567890123"));
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(!is_valid_phone("12345678a"));
        assert!(!is_valid_phone("+84912345678"));
        assert!(!is_valid_phone("0912 345 678"));
        // Non-ASCII digits do not count.
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(!is_valid_password("abcde"));
        assert!(is_valid_password("abcdef"));
        assert!(is_valid_password("mậtkhẩ"));
    }

    #[test]
    fn test_fields_present() {
        assert!(fields_present(&["a", " ", "b"]));
        assert!(!fields_present(&["a", "", "b"]));
        assert!(fields_present(&[]));
    }

    #[test]
    fn test_registration_accepts_valid_form() {
        assert!(check_registration(&valid_form()).is_ok());
    }

    #[test]
    fn test_registration_first_failure_wins() {
        // Missing name beats the bad email.
        let form = RegistrationForm { full_name: String::new(), email: "bad".into(), ..valid_form() };
        assert!(matches!(check_registration(&form), Err(RegisterError::MissingFields)));

        // Bad email beats the bad phone.
        let form = RegistrationForm { email: "bad".into(), phone: "1".into(), ..valid_form() };
        assert!(matches!(check_registration(&form), Err(RegisterError::InvalidEmail)));

        // Bad phone beats the short password.
        let form = RegistrationForm {
            phone: "1".into(),
            password: "abc".into(),
            confirm_password: "xyz".into(),
            ..valid_form()
        };
        assert!(matches!(check_registration(&form), Err(RegisterError::InvalidPhone)));

        // Short password beats the mismatch.
        let form = RegistrationForm { password: "abc".into(), confirm_password: "xyz".into(), ..valid_form() };
        assert!(matches!(check_registration(&form), Err(RegisterError::PasswordTooShort)));

        let form = RegistrationForm { confirm_password: "secret2".into(), ..valid_form() };
        assert!(matches!(check_registration(&form), Err(RegisterError::PasswordMismatch)));
    }

    #[test]
    fn test_login_checks() {
        assert!(matches!(check_login(&LoginForm::new("", "x")), Err(LoginError::MissingFields)));
        assert!(matches!(check_login(&LoginForm::new("a@b.c", "")), Err(LoginError::MissingFields)));
        assert!(matches!(check_login(&LoginForm::new("nope", "x")), Err(LoginError::InvalidEmail)));
        assert!(check_login(&LoginForm::new("a@b.c", "x")).is_ok());
    }
}
