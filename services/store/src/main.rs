use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod jwt;
mod middleware;
mod models;
mod password;
mod repositories;
mod routes;
mod state;
mod validation;

use common::config::AppConfig;
use common::database;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting storefront service");

    // .env is optional; real deployments set the environment directly
    dotenvy::dotenv().ok();

    // Load all configuration once; components receive it by reference
    let config = AppConfig::from_env()?;

    // Initialize database connection pool
    let pool = database::init_pool(&config.database).await?;

    // Check database connectivity
    database::health_check(&pool).await?;
    info!("Database connection successful");

    let app_state = AppState::new(pool, &config)?;

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Storefront service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
