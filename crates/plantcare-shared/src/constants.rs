//! Application-wide constants

/// Storage key under which the single user record lives.
pub const USER_RECORD_KEY: &str = "user";

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_PHONE_DIGITS: usize = 9;
pub const MAX_PHONE_DIGITS: usize = 12;

pub const DEFAULT_APP_NAME: &str = "plantcare";
pub const DEFAULT_STORAGE_DIR: &str = "data";
pub const DEFAULT_LOG_LEVEL: &str = "info";
