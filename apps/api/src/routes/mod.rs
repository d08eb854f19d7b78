// Route table. Handlers live next to the services they expose.

pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::catalog::handlers::handle_get_countries;
use crate::chat::handlers::handle_chat;
use crate::matching::handlers::handle_get_matches;
use crate::report::handlers::handle_get_report;
use crate::review::handlers::handle_review;
use crate::session::handlers::{
    handle_add_to_shortlist, handle_create_session, handle_destroy_session,
    handle_get_shortlist, handle_remove_from_shortlist, handle_save_profile,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handle_health))
        .route("/api/v1/sessions", post(handle_create_session))
        .route("/api/v1/sessions/:id", delete(handle_destroy_session))
        .route("/api/v1/catalog/countries", get(handle_get_countries))
        .route("/api/v1/profile", put(handle_save_profile))
        .route("/api/v1/matches", get(handle_get_matches))
        .route(
            "/api/v1/shortlist",
            get(handle_get_shortlist).post(handle_add_to_shortlist),
        )
        .route(
            "/api/v1/shortlist/:name",
            delete(handle_remove_from_shortlist),
        )
        .route("/api/v1/review", post(handle_review))
        .route("/api/v1/chat", post(handle_chat))
        .route("/api/v1/report", get(handle_get_report))
        .with_state(state)
}
