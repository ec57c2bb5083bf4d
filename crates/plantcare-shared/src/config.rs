//! Configuration management

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_APP_NAME, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_DIR};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

/// Where the local record store keeps its data.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub dir: String,
    /// Keep records in memory only (nothing survives a restart).
    pub in_memory: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    /// Directory for the daily rolling log file. Stdout only when unset.
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl AppConfig {
    /// Load from `.env`, `config/default`, `config/{APP_ENV}` and environment
    /// variables (`STORAGE__DIR=/var/lib/plantcare`), in that order.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &env)
    }

    pub fn load_from(config_dir: &Path, env: &str) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(env);
        let config = Config::builder()
            .set_default("app.env", env)?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("storage.dir", DEFAULT_STORAGE_DIR)?
            .set_default("storage.in_memory", false)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?
            .set_default("log.format", "pretty")?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
