//! Plantcare App
//!
//! Screen state behind the login and registration screens. Rendering is left
//! to the host UI; this crate holds form state, the current error message,
//! and the event channel the UI drains.

pub mod app;
pub mod events;
pub mod navigation;
pub mod session;
pub mod viewmodel;

pub use app::App;
pub use events::AppEvent;
pub use navigation::{Navigation, Screen};
pub use session::ChannelSessionSignal;
