//! Repositories for database operations
//!
//! Each repository owns a clone of the shared connection pool; statements
//! acquire a connection for exactly the duration of the call on every exit
//! path. Every logical operation runs under the configured statement
//! timeout and surfaces datastore failures tagged with the operation name.

use std::future::Future;
use std::time::Duration;

use crate::error::{StoreError, StoreResult};

pub mod order;
pub mod product;
pub mod user;

// Re-export for convenience
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

/// Run one datastore operation under the statement timeout
pub(crate) async fn run<T, F>(
    operation: &'static str,
    limit: Duration,
    query: F,
) -> StoreResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, query).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(StoreError::Unavailable { operation, source }),
        Err(_) => Err(StoreError::Timeout { operation }),
    }
}
