//! Application Events
//!
//! Events sent from the flows to whoever drives the UI.

use crate::navigation::Navigation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Session signal: this email is now signed in
    LoginSuccess(String),
    /// Registration stored; the UI shows its confirmation
    RegisterSuccess,
    /// Screen change requested by a view-model
    Navigate(Navigation),
}
