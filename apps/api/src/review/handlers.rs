use axum::extract::{Multipart, Query, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::REVIEWER_SYSTEM;
use crate::review::extract::extract_document_text;
use crate::review::prompts::build_review_prompt;
use crate::session::handlers::SessionIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub feedback: String,
}

/// POST /api/v1/review - accepts a multipart document upload and returns
/// structured LLM feedback. The feedback is also stored on the session so
/// the report can include it.
pub async fn handle_review(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
    mut multipart: Multipart,
) -> Result<Json<ReviewResponse>, AppError> {
    // Fail on a dead session before reading the upload or paying for an
    // LLM call.
    state.sessions.read(query.session_id, |_| ()).await?;

    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
        .ok_or_else(|| AppError::Validation("Upload must contain a document field".to_string()))?;

    let content_type = field.content_type().map(str::to_string);
    let filename = field.file_name().map(str::to_string);
    let data: Bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

    let document = extract_document_text(content_type.as_deref(), filename.as_deref(), &data)?;

    info!(
        session_id = %query.session_id,
        bytes = data.len(),
        chars = document.len(),
        "Reviewing uploaded document"
    );

    let feedback = state
        .advisor
        .advise(REVIEWER_SYSTEM, &build_review_prompt(&document))
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    state
        .sessions
        .update(query.session_id, |session| {
            session.sop_feedback = Some(feedback.clone());
        })
        .await?;

    Ok(Json(ReviewResponse { feedback }))
}
