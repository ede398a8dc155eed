//! Custom error types for the common library
//!
//! This module defines the infrastructure error types shared by the
//! services: configuration loading and database connectivity.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable is set but cannot be parsed
    #[error("invalid value {value:?} for environment variable {var}")]
    InvalidVar { var: &'static str, value: String },
}

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
