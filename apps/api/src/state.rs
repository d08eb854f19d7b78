use std::sync::Arc;

use crate::catalog::Catalog;
use crate::llm_client::Advisor;
use crate::session::SessionStore;

/// Shared application state handed to every handler.
///
/// The advisor is a trait object so tests can swap in a canned
/// implementation instead of the live client.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub advisor: Arc<dyn Advisor>,
    pub sessions: SessionStore,
}
