//! Consent API endpoints.

use axum::extract::State;

use super::{success, ApiResult, AppJson, AppPath};
use crate::consent::{self, CURRENT_TERMS_VERSION};
use crate::errors::AppError;
use crate::models::{ConsentRecord, CreateConsentRequest};
use crate::AppState;

/// POST /api/consents - Record an accepted consent.
pub async fn create_consent(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateConsentRequest>,
) -> ApiResult<ConsentRecord> {
    consent::validate(&request)?;

    if let Some(conversation_id) = &request.conversation_id {
        if state.repo.get_conversation(conversation_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Conversation {} not found",
                conversation_id
            )));
        }
    }

    let record = state
        .repo
        .create_consent(&request, CURRENT_TERMS_VERSION)
        .await?;
    tracing::info!(consent_id = %record.id, "Consent recorded");
    success(record)
}

/// GET /api/admin/consents - List consent records.
pub async fn list_consents(State(state): State<AppState>) -> ApiResult<Vec<ConsentRecord>> {
    success(state.repo.list_consents().await?)
}

/// GET /api/admin/consents/:id - Get a single consent record.
pub async fn get_consent(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> ApiResult<ConsentRecord> {
    match state.repo.get_consent(&id).await? {
        Some(record) => success(record),
        None => Err(AppError::NotFound(format!("Consent {} not found", id))),
    }
}
