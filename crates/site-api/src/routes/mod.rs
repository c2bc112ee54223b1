//! Route handlers for the site API.

pub mod contact;
pub mod gallery;
pub mod health;
pub mod socials;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/contact", post(contact::submit_api))
        .route("/api/contact/socials", get(socials::socials_api))
        .route("/api/gallery", get(gallery::list_api))
}
