//! Contact form routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::state::AppState;
use crate::submit::{self, ContactForm};

/// Response for an accepted submission.
#[derive(Serialize)]
pub struct SubmitResponse {
    pub id: String,
}

/// Accept a contact form submission.
pub async fn submit_api(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<SubmitResponse>)> {
    let id = submit::submit(state.store.as_ref(), state.ids.as_ref(), form).await?;
    info!(message = %id, "Contact message received");

    Ok((StatusCode::CREATED, Json(SubmitResponse { id })))
}
