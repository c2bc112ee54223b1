//! Public HTTP API for the SleeQ House site.
//!
//! Serves the contact submission endpoint, the gallery and social-links
//! reads, and the prebuilt frontend from `static/`.

mod config;
mod error;
mod routes;
mod state;
mod submit;

use std::sync::Arc;

use store::{RandomIds, Store};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting site API server");

    // Connect to the document store
    let store = Store::connect(&config.database_url).await?;
    store.migrate().await?;

    // Build application state
    let state = AppState::new(Arc::new(store), Arc::new(RandomIds));

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Site API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
