//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use quill_infra::DatabaseConfig;
use thiserror::Error;

/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 4001;

/// Configuration problems that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database = DatabaseConfig {
            url,
            ssl: lookup("DB_SSL")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1)?,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            database,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
