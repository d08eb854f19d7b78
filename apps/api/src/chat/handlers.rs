use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::prompts::build_chat_prompt;
use crate::errors::AppError;
use crate::llm_client::prompts::COUNSELOR_SYSTEM;
use crate::session::handlers::SessionIdQuery;
use crate::session::models::{ChatRole, ChatTurn};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat - one counseling turn. Both sides of the exchange are
/// appended to the session history only after the LLM call succeeds, so a
/// failed call leaves the transcript untouched.
pub async fn handle_chat(
    State(state): State<AppState>,
    Query(query): Query<SessionIdQuery>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::Validation("Message must not be empty".to_string()));
    }

    let (profile, shortlist) = state
        .sessions
        .read(query.session_id, |session| {
            (session.profile.clone(), session.shortlist.names().to_vec())
        })
        .await?;

    let profile = profile.ok_or_else(|| {
        AppError::Validation("Complete onboarding before using the chat".to_string())
    })?;

    let prompt = build_chat_prompt(&profile, &shortlist, &message);
    let reply = state
        .advisor
        .advise(COUNSELOR_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    state
        .sessions
        .update(query.session_id, |session| {
            session.chat_history.push(ChatTurn {
                role: ChatRole::Student,
                text: message.clone(),
            });
            session.chat_history.push(ChatTurn {
                role: ChatRole::Advisor,
                text: reply.clone(),
            });
        })
        .await?;

    info!(session_id = %query.session_id, "Chat turn complete");
    Ok(Json(ChatResponse { reply }))
}
