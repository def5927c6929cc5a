//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "NOUGHTS_HOST";

/// Environment variable overriding the bind port.
pub const PORT_ENV: &str = "NOUGHTS_PORT";

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host or address to bind.
    host: String,

    /// TCP port to bind.
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Creates a configuration from explicit values.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Keys left out of the file keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Applies `NOUGHTS_HOST` / `NOUGHTS_PORT` as returned by `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_ENV) {
            debug!(%host, "Host overridden from environment");
            self.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid {}={:?}: {}", PORT_ENV, port, e)))?;
            debug!(port = self.port, "Port overridden from environment");
        }
        Ok(self)
    }

    /// Replaces the host if one is given.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        self
    }

    /// Replaces the port if one is given.
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
