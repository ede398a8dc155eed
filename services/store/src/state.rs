//! Application state shared across handlers

use common::config::AppConfig;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::jwt::TokenService;
use crate::password::CredentialHasher;
use crate::repositories::{OrderRepository, ProductRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenService,
    pub users: UserRepository,
    pub products: ProductRepository,
    pub orders: OrderRepository,
}

impl AppState {
    /// Build the state from the loaded configuration and an initialized pool
    pub fn new(pool: PgPool, config: &AppConfig) -> StoreResult<Self> {
        let hasher = CredentialHasher::new(config.auth.pepper.clone(), config.auth.hash_iterations)?;
        let tokens = TokenService::new(&config.auth.token_secret, config.auth.token_expiry_secs);
        let timeout = config.database.statement_timeout();

        Ok(Self {
            users: UserRepository::new(pool.clone(), hasher, tokens.clone(), timeout),
            products: ProductRepository::new(pool.clone(), timeout),
            orders: OrderRepository::new(pool.clone(), timeout),
            tokens,
            pool,
        })
    }
}
