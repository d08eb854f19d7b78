use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::state::AppState;

/// Session selector carried by every per-student endpoint.
#[derive(Debug, Deserialize)]
pub struct SessionIdQuery {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// POST /api/v1/sessions - starts a counseling session.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Json<CreateSessionResponse> {
    let session_id = state.sessions.create().await;
    info!(%session_id, "Session created");
    Json(CreateSessionResponse { session_id })
}

/// DELETE /api/v1/sessions/:id - discards a session and all its state.
pub async fn handle_destroy_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.destroy(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!(session_id = %id, "Session destroyed");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/profile - saves the onboarding profile for a session.
/// Replaces any previously saved profile wholesale.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<StudentProfile>, AppError> {
    profile.validate().map_err(AppError::Validation)?;

    let saved = state
        .sessions
        .update(query.session_id, |session| {
            session.profile = Some(profile.clone());
            profile
        })
        .await?;

    info!(session_id = %query.session_id, country = %saved.country, "Profile saved");
    Ok(Json(saved))
}

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    pub shortlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShortlistAddRequest {
    pub name: String,
}

/// GET /api/v1/shortlist - the session's saved universities in add order.
pub async fn handle_get_shortlist(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let shortlist = state
        .sessions
        .read(query.session_id, |session| session.shortlist.names().to_vec())
        .await?;
    Ok(Json(ShortlistResponse { shortlist }))
}

/// POST /api/v1/shortlist - saves a university by name. Adding a name
/// that is already saved is accepted and changes nothing.
pub async fn handle_add_to_shortlist(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
    Json(request): Json<ShortlistAddRequest>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation(
            "University name must not be empty".to_string(),
        ));
    }

    let (added, shortlist) = state
        .sessions
        .update(query.session_id, |session| {
            let added = session.shortlist.add(name.clone());
            (added, session.shortlist.names().to_vec())
        })
        .await?;

    if added {
        info!(session_id = %query.session_id, university = %name, "Shortlisted");
    }
    Ok(Json(ShortlistResponse { shortlist }))
}

/// DELETE /api/v1/shortlist/:name - drops one university from the shortlist.
/// Removing a name that is not saved is a no-op, not an error.
pub async fn handle_remove_from_shortlist(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
    Path(name): Path<String>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let shortlist = state
        .sessions
        .update(query.session_id, |session| {
            session.shortlist.remove(&name);
            session.shortlist.names().to_vec()
        })
        .await?;
    Ok(Json(ShortlistResponse { shortlist }))
}
