//! Process configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;
use std::num::ParseIntError;
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable naming the deployment environment.
pub const APP_ENV_VAR: &str = "APP_ENV";
/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
/// Environment variable bounding the connection pool.
pub const POOL_SIZE_VAR: &str = "DATABASE_POOL_SIZE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// The listen address does not parse.
    #[error("{BIND_ADDR_VAR} '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        /// Raw value supplied.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// The pool size is not a positive integer.
    #[error("{POOL_SIZE_VAR} '{value}' must be a positive integer")]
    InvalidPoolSize {
        /// Raw value supplied.
        value: String,
        /// Parse failure, if the value was not numeric.
        source: Option<ParseIntError>,
    },
}

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Enables debug-level logging when running in `development`.
    pub debug: bool,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Maximum pooled database connections.
    pub pool_size: u32,
}

impl AppConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let debug = lookup(APP_ENV_VAR)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("development"));

        let raw_bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_bind.clone(),
                source,
            })?;

        let pool_size = match lookup(POOL_SIZE_VAR) {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => parse_pool_size(&raw)?,
        };

        Ok(Self {
            database_url,
            debug,
            bind_addr,
            pool_size,
        })
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|source| ConfigError::InvalidPoolSize {
            value: raw.to_owned(),
            source: Some(source),
        })?;
    if size == 0 {
        return Err(ConfigError::InvalidPoolSize {
            value: raw.to_owned(),
            source: None,
        });
    }
    Ok(size)
}
