//! Utility functions

/// Masks the local part of an email for log output, e.g. `ja***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let visible: String = local.chars().take(keep).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}
