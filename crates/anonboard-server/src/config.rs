// ABOUTME: Configuration loading and validation for the anonboard server.
// ABOUTME: Reads environment variables with defaults matching the single-file deployment layout.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ANONBOARD_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AnonboardConfig {
    pub bind: SocketAddr,
    pub data_file: PathBuf,
}

impl AnonboardConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - ANONBOARD_BIND: socket address to bind (default: 127.0.0.1:7171)
    /// - ANONBOARD_DATA_FILE: message snapshot path (default: messages.json)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_str =
            std::env::var("ANONBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:7171".to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        let data_file = std::env::var("ANONBOARD_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("messages.json"));

        Ok(Self { bind, data_file })
    }
}
