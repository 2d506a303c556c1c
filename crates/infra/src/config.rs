//! Configuration loading and representation.

use thiserror::Error;

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "SERVERPORT";
/// Environment variable holding the bind host.
pub const HOST_VAR: &str = "SERVERHOST";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' is not a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid {var}: must not be empty")]
    EmptyHost { var: &'static str },
}

/// Where the HTTP adapter listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load from `SERVERHOST` / `SERVERPORT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(HOST_VAR) {
            Some(h) if h.trim().is_empty() => return Err(ConfigError::EmptyHost { var: HOST_VAR }),
            Some(h) => h.trim().to_string(),
            None => DEFAULT_HOST.to_string(),
        };

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
