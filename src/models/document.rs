//! Club document models.

use serde::{Deserialize, Serialize};

/// Category of a club document, derived from its file name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Reglamento,
    Inscripcion,
    Precios,
    General,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Reglamento => "reglamento",
            DocType::Inscripcion => "inscripcion",
            DocType::Precios => "precios",
            DocType::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reglamento" => Some(DocType::Reglamento),
            "inscripcion" => Some(DocType::Inscripcion),
            "precios" => Some(DocType::Precios),
            "general" => Some(DocType::General),
            _ => None,
        }
    }
}

/// An ingested document file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub source: String,
    pub doc_type: DocType,
    pub content_hash: String,
    pub chunk_count: i64,
    pub ingested_at: String,
}

/// A searchable piece of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChunk {
    pub id: String,
    pub source: String,
    pub doc_type: DocType,
    pub position: i64,
    pub content: String,
}

/// Outcome of a document directory sync.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub ingested: Vec<String>,
    pub unchanged: Vec<String>,
    pub removed: Vec<String>,
    pub skipped: Vec<String>,
    pub chunks_written: usize,
    /// Chunks in the search index after the sync
    pub indexed_chunks: usize,
    /// Cached replies were dropped because the documents changed
    pub cache_cleared: bool,
}

impl SyncReport {
    /// Whether the stored documents differ from before the sync.
    pub fn has_changes(&self) -> bool {
        !self.ingested.is_empty() || !self.removed.is_empty()
    }
}
