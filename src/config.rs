//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_AUTH_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTH_API_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// `AUTH_API_URL` is not an absolute http(s) URL.
    #[error("AUTH_API_URL must start with http:// or https://, got {0:?}")]
    AuthApiScheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the Auth API, without a trailing `/`.
    pub auth_api_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_API_URL`: default `http://localhost:8080/api`
    /// - `AUTH_API_TIMEOUT_SECS`: default 10
    /// - `AUTH_API_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let auth_api_url = lookup("AUTH_API_URL")
            .unwrap_or_else(|| DEFAULT_AUTH_API_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        if !(auth_api_url.starts_with("http://") || auth_api_url.starts_with("https://")) {
            return Err(ConfigError::AuthApiScheme(auth_api_url));
        }

        let timeouts = UpstreamTimeouts {
            request: Duration::from_secs(parse_or(
                "AUTH_API_TIMEOUT_SECS",
                lookup("AUTH_API_TIMEOUT_SECS"),
                DEFAULT_AUTH_API_TIMEOUT_SECS,
            )?),
            connect: Duration::from_secs(parse_or(
                "AUTH_API_CONNECT_TIMEOUT_SECS",
                lookup("AUTH_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_AUTH_API_CONNECT_TIMEOUT_SECS,
            )?),
        };

        Ok(Self { port, auth_api_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
