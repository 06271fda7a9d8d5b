mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use config::Config;
use error::AppError;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questlog=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState::new(db, http_client, Arc::new(config));
    let app = router::router().with_state(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to bind {}: {}", addr, err)))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::InternalError(format!("Server error: {}", err)))?;

    Ok(())
}
