//! Social links route.

use axum::extract::State;
use axum::Json;

use store::{settings, SocialLinks};

use crate::error::Result;
use crate::state::AppState;

/// Return the configured social links as a platform-to-URL object.
pub async fn socials_api(State(state): State<AppState>) -> Result<Json<SocialLinks>> {
    let links = settings::social_links(state.store.as_ref()).await?;
    Ok(Json(links))
}
