//! Cache admin endpoint.

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheCleared {
    pub enabled: bool,
    pub cleared_entries: u64,
}

/// DELETE /api/admin/cache - Drop every cached reply.
pub async fn clear_cache(State(state): State<AppState>) -> ApiResult<CacheCleared> {
    let cache = state.engine.cache();
    if !cache.is_enabled() {
        return success(CacheCleared {
            enabled: false,
            cleared_entries: 0,
        });
    }

    let cleared = cache
        .clear()
        .await
        .ok_or_else(|| AppError::Internal("Failed to clear the response cache".to_string()))?;

    success(CacheCleared {
        enabled: true,
        cleared_entries: cleared,
    })
}
