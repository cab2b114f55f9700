//! Server configuration parsed from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5001";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://127.0.0.1:5001`
    /// - `BACKEND_TIMEOUT_SECS`: default 30, must be positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            backend_url: parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?,
            backend_timeout_secs: parse_timeout_secs(std::env::var("BACKEND_TIMEOUT_SECS").ok().as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "BACKEND_URL", value: value.to_owned() });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_timeout_secs(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BACKEND_TIMEOUT_SECS),
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::Invalid { var: "BACKEND_TIMEOUT_SECS", value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
