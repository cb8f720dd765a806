use std::env;
use std::net::SocketAddr;

/// Environment variable overriding the listen address
pub const BIND_ADDR_ENV: &str = "FILE_EXPORT_BIND_ADDR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} '{value}': {source}")]
    InvalidBindAddr {
        key: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_ENV) {
            let value = value.trim().to_string();
            config.bind_addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    key: BIND_ADDR_ENV,
                    value,
                    source,
                })?;
        }

        Ok(config)
    }
}
