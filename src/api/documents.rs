//! Document search and admin endpoints.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult, AppQuery};
use crate::documents;
use crate::models::{DocType, Document, SyncReport};
use crate::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search query string.
    pub q: String,
    /// Maximum number of results (default: 5).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Maximum number of search results allowed.
const MAX_SEARCH_LIMIT: usize = 20;

/// Search results with metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
    pub total: usize,
    pub limit: usize,
}

/// Single search result item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub chunk_id: String,
    pub source: String,
    pub doc_type: DocType,
    pub content: String,
    pub score: f32,
}

/// GET /api/documents/search - Search the club documents.
pub async fn search_documents(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchQuery>,
) -> ApiResult<SearchResponse> {
    let limit = params.limit.min(MAX_SEARCH_LIMIT);

    let results: Vec<SearchResultItem> = state
        .search
        .search(&params.q, limit)?
        .into_iter()
        .map(|hit| SearchResultItem {
            chunk_id: hit.chunk_id,
            source: hit.source,
            doc_type: hit.doc_type,
            content: hit.content,
            score: hit.score,
        })
        .collect();

    let total = results.len();
    success(SearchResponse {
        results,
        total,
        limit,
    })
}

/// GET /api/admin/documents - List ingested documents.
pub async fn list_documents(State(state): State<AppState>) -> ApiResult<Vec<Document>> {
    success(state.repo.list_documents().await?)
}

/// POST /api/admin/documents/reindex - Re-read the documents directory.
pub async fn reindex_documents(State(state): State<AppState>) -> ApiResult<SyncReport> {
    let mut report =
        documents::reindex(&state.repo, &state.search, &state.config.docs_path).await?;

    // Cached document and generic replies may quote removed or miss new files.
    if report.has_changes() {
        report.cache_cleared = state.engine.cache().clear().await.is_some();
    }

    tracing::info!(
        ingested = report.ingested.len(),
        removed = report.removed.len(),
        indexed = report.indexed_chunks,
        cache_cleared = report.cache_cleared,
        "Documents reindexed"
    );
    success(report)
}
