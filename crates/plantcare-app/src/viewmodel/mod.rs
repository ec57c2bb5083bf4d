//! ViewModel Module
//!
//! Form state per screen. Each submit resets the error slot, runs its flow to
//! completion, and reports the outcome through the event channel.

pub mod login_vm;
pub mod register_vm;

pub use login_vm::LoginViewModel;
pub use register_vm::RegisterViewModel;
