use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::{find_matches, ScoredMatch};
use crate::session::handlers::SessionIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<ScoredMatch>,
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// GET /api/v1/matches - runs the matching pipeline for the session profile.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
) -> Result<Json<MatchesResponse>, AppError> {
    let profile = state
        .sessions
        .read(query.session_id, |session| session.profile.clone())
        .await?
        .ok_or_else(|| {
            AppError::Validation("Complete onboarding before requesting matches".to_string())
        })?;

    let outcome = find_matches(&profile, &state.catalog);

    info!(
        session_id = %query.session_id,
        matches = outcome.matches.len(),
        fallback = outcome.fallback,
        "Matching run complete"
    );

    let notice = outcome.fallback.then(|| {
        format!(
            "No programs matched '{}'; showing top-ranked universities in {} instead",
            profile.course.trim(),
            profile.country
        )
    });

    Ok(Json(MatchesResponse {
        matches: outcome.matches,
        fallback: outcome.fallback,
        notice,
    }))
}
