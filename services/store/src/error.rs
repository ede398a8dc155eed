//! Custom error types for the storefront service
//!
//! [`StoreError`] is the typed failure every repository operation returns.
//! The core never retries: each datastore failure is wrapped with the name
//! of the operation that issued it and carries the original cause. The
//! `IntoResponse` impl at the bottom is the transport boundary that maps
//! each variant to a status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::jwt::TokenError;

/// Custom error type for the storefront service
#[derive(Error, Debug)]
pub enum StoreError {
    /// A lookup matched no row
    #[error("{what} not found")]
    NotFound { what: String },

    /// Registration hit the `user_name` unique constraint
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    /// Unknown username or password mismatch; the two are not distinguished
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The request body failed boundary validation
    #[error("{0}")]
    InvalidInput(String),

    /// Missing, malformed, or unverifiable bearer token
    #[error("authentication required")]
    Unauthenticated,

    /// The atomic order-plus-association insert failed; nothing was persisted
    #[error("order creation failed")]
    CreateFailed(#[source] sqlx::Error),

    /// A datastore round-trip failed
    #[error("{operation} failed")]
    Unavailable {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A datastore round-trip exceeded the statement timeout
    #[error("{operation} timed out")]
    Timeout { operation: &'static str },

    /// Token signing or verification failed outside the access gate
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Type alias for storefront results
pub type StoreResult<T> = Result<T, StoreError>;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::DuplicateUsername(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::InvalidCredentials => StatusCode::FORBIDDEN,
            StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            StoreError::Unauthenticated => StatusCode::UNAUTHORIZED,
            StoreError::CreateFailed(_)
            | StoreError::Unavailable { .. }
            | StoreError::Timeout { .. }
            | StoreError::Token(_)
            | StoreError::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
