//! Server configuration.

use std::env;

/// Default port, matching the service's historical fixed port.
const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Log level.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through the given variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("USER_SERVICE_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("USER_SERVICE_PORT is not a valid port: {value}"))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("USER_SERVICE_HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("USER_SERVICE_LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
