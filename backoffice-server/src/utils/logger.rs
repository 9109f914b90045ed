//! Logging infrastructure
//!
//! Structured logging setup for development and production:
//! - console output (compact in development, JSON in production)
//! - optional daily-rotating application log file

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - default log level when `RUST_LOG` is unset (e.g. "info")
/// * `json_format` - JSON output (production) vs compact output (development)
/// * `log_dir` - optional directory for the daily-rotating `app.*` log file
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let file_layer = log_dir.map(|dir| {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "app");
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(appender))
        });
        registry
            .with(fmt::layer().json().with_target(true))
            .with(file_layer)
            .init();
    } else {
        let file_layer = log_dir.map(|dir| {
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "app");
            fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(appender))
        });
        registry
            .with(fmt::layer().compact().with_target(true))
            .with(file_layer)
            .init();
    }

    Ok(())
}
