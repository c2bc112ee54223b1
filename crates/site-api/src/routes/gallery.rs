//! Gallery listing route.

use axum::extract::State;
use axum::Json;

use store::{gallery, GalleryItem};

use crate::error::Result;
use crate::state::AppState;

/// List all gallery items as JSON.
pub async fn list_api(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>> {
    let items = gallery::list_items(state.store.as_ref()).await?;
    Ok(Json(items))
}
