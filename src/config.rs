use std::str::FromStr;

use crate::error::ConfigError;

pub const HOST_VAR: &str = "LINEUP_HOST";
pub const PORT_VAR: &str = "LINEUP_PORT";
pub const MAX_INNINGS_VAR: &str = "LINEUP_MAX_INNINGS";

/// Application settings for the web server and lineup validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound accepted for `numberOfInnings`
    pub max_innings: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_innings: 12,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns the raw value for a variable name
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let host = lookup(HOST_VAR)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port);
        let max_innings = max_innings_from_lookup(&lookup)?;

        Ok(AppConfig {
            host,
            port,
            max_innings,
        })
    }

    /// Reads only `LINEUP_MAX_INNINGS`, for commands that never bind a socket
    pub fn max_innings_from_env() -> Result<u32, ConfigError> {
        max_innings_from_lookup(&|key: &str| std::env::var(key).ok())
    }
}

fn max_innings_from_lookup<F>(lookup: &F) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<u32, _>(lookup, MAX_INNINGS_VAR)? {
        Some(0) => Err(ConfigError::InvalidValue {
            key: MAX_INNINGS_VAR.to_string(),
            value: "0".to_string(),
        }),
        Some(n) => Ok(n),
        None => Ok(AppConfig::default().max_innings),
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw,
                })
        }
        _ => Ok(None),
    }
}
