use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::report::pagination::PageConfig;
use crate::report::render_report;
use crate::session::handlers::SessionIdQuery;
use crate::state::AppState;

/// GET /api/v1/report - renders the session as a downloadable plain-text
/// report.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let session = state
        .sessions
        .read(query.session_id, |session| session.clone())
        .await?;

    if session.profile.is_none() {
        return Err(AppError::Validation(
            "Complete onboarding before exporting a report".to_string(),
        ));
    }

    let body = render_report(&session, Utc::now(), PageConfig::default());

    info!(session_id = %query.session_id, bytes = body.len(), "Report exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"counseling_report.txt\"",
            ),
        ],
        body,
    ))
}
