//! Server configuration
//!
//! All configuration is read from the environment at process start and
//! injected as an explicit struct; nothing is hardcoded in source.
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | WORK_DIR | ./work_dir | Data and log directory |
//! | HTTP_PORT | 5000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | CLIENT_ORIGIN | http://localhost:3000 | Admin UI origin allowed by CORS |
//! | LOG_LEVEL | info | Default tracing level when RUST_LOG is unset |

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Admin UI origin allowed by CORS
    pub client_origin: String,
    /// Default log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            client_origin: std::env::var("CLIENT_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database files
    pub fn data_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("data")
    }

    /// Directory holding rotated log files
    pub fn log_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
