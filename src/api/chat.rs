//! Chat API endpoints.

use axum::extract::State;

use super::{success, ApiResult, AppJson, AppPath};
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse, Conversation, Message};
use crate::AppState;

/// POST /api/chat - Answer a visitor message.
pub async fn post_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> ApiResult<ChatResponse> {
    let response = state.engine.chat(&request).await?;
    success(response)
}

async fn find_conversation(state: &AppState, id: &str) -> Result<Conversation, AppError> {
    state
        .repo
        .get_conversation(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Conversation {} not found", id)))
}

/// GET /api/conversations/:id - Get a single conversation.
pub async fn get_conversation(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> ApiResult<Conversation> {
    success(find_conversation(&state, &id).await?)
}

/// GET /api/conversations/:id/messages - List a conversation's messages in order.
pub async fn list_messages(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> ApiResult<Vec<Message>> {
    let conversation = find_conversation(&state, &id).await?;
    success(state.repo.list_messages(&conversation.id).await?)
}
