//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogFormat, LogSettings};
use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` wins over `log.level`.
pub fn init_telemetry(settings: &LogSettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    let stdout_layer = match settings.format {
        LogFormat::Json => fmt::layer().json().with_target(true).boxed(),
        LogFormat::Pretty => fmt::layer().pretty().with_target(true).boxed(),
    };

    let file_layer = match &settings.dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("plantcare")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?;
            Some(fmt::layer().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::TelemetryError(e.to_string()))
}
