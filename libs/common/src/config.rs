//! Application configuration
//!
//! All configuration is read from the environment exactly once at startup
//! into an [`AppConfig`], which is then passed by reference into each
//! component constructor. Components never read the environment themselves.

use std::env;
use std::str::FromStr;

use crate::database::DatabaseConfig;
use crate::error::ConfigError;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database pool settings
    pub database: DatabaseConfig,
    /// Credential and token settings
    pub auth: AuthConfig,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

/// Credential hashing and token signing configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Application-wide secret appended to every password before hashing,
    /// distinct from the per-record random salt
    pub pepper: String,
    /// Argon2 time cost (work factor)
    pub hash_iterations: u32,
    /// Shared secret used to sign and verify bearer tokens
    pub token_secret: String,
    /// Token lifetime in seconds
    pub token_expiry_secs: u64,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: PostgreSQL connection URL (required)
    /// - `DATABASE_MAX_CONNECTIONS`: maximum pool size (default: 10)
    /// - `DATABASE_MIN_CONNECTIONS`: minimum pool size (default: 5)
    /// - `DATABASE_CONNECTION_TIMEOUT`: pool acquire timeout in seconds (default: 30)
    /// - `DATABASE_STATEMENT_TIMEOUT`: per-operation timeout in seconds (default: 5)
    /// - `PASSWORD_PEPPER`: application-wide password pepper (required)
    /// - `HASH_ITERATIONS`: Argon2 time cost (default: 3)
    /// - `TOKEN_SECRET`: bearer-token signing secret (required)
    /// - `TOKEN_EXPIRY_SECS`: token lifetime in seconds (default: 86400)
    /// - `BIND_ADDR`: listen address (default: 0.0.0.0:3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AppConfig {
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        })
    }
}

impl AuthConfig {
    /// Load the auth section from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AuthConfig {
            pepper: required("PASSWORD_PEPPER")?,
            hash_iterations: parsed_or("HASH_ITERATIONS", 3)?,
            token_secret: required("TOKEN_SECRET")?,
            token_expiry_secs: parsed_or("TOKEN_EXPIRY_SECS", 86_400)?,
        })
    }
}

/// Read a required environment variable
pub(crate) fn required(var: &'static str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::MissingVar(var))
}

/// Read an optional environment variable, parsing it when present
pub(crate) fn parsed_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value }),
        Err(_) => Ok(default),
    }
}
