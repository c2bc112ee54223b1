//! Application state shared across handlers.

use std::sync::Arc;

use store::{DocumentStore, IdGenerator};

/// Shared application state.
///
/// Handlers depend on the store and id-generator traits, so tests can
/// inject stubs and the production wiring happens once in `main`.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    pub store: Arc<dyn DocumentStore>,
    /// Identifier generator for submissions.
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Arc<dyn DocumentStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }
}
