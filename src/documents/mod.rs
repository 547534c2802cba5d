//! Club document ingestion.
//!
//! Plain-text, Markdown and PDF files from the documents directory are
//! hashed, split into overlapping chunks and stored in SQLite; the search
//! index is rebuilt from the stored chunks.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use sha2::{Digest, Sha256};
use text_splitter::{ChunkConfig, MarkdownSplitter, TextSplitter};

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{DocType, Document, DocumentChunk, SyncReport};
use crate::search::SearchIndex;

/// Target chunk size, in characters.
pub const CHUNK_SIZE: usize = 1000;
pub const CHUNK_OVERLAP: usize = 200;

const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "pdf"];

/// Classify a document by its file name.
pub fn identify_doc_type(file_name: &str) -> DocType {
    let lowered = file_name.to_lowercase();
    if lowered.contains("reglamento") {
        DocType::Reglamento
    } else if lowered.contains("inscripcion") {
        DocType::Inscripcion
    } else if lowered.contains("precios") {
        DocType::Precios
    } else {
        DocType::General
    }
}

/// Split document text into overlapping chunks.
pub fn chunk_text(text: &str, is_markdown: bool) -> Result<Vec<String>, AppError> {
    let config = ChunkConfig::new(CHUNK_SIZE)
        .with_overlap(CHUNK_OVERLAP)
        .map_err(|e| AppError::Ingest(format!("Invalid chunk configuration: {}", e)))?;

    let chunks = if is_markdown {
        MarkdownSplitter::new(config)
            .chunks(text)
            .map(str::to_string)
            .collect()
    } else {
        TextSplitter::new(config)
            .chunks(text)
            .map(str::to_string)
            .collect()
    };

    Ok(chunks)
}

fn content_hash(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

/// Read the text of a document. PDF text is extracted off the async runtime.
async fn load_text(path: &Path, extension: &str) -> Result<String, AppError> {
    if extension != "pdf" {
        return tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Ingest(format!("Failed to read file: {}", e)));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::Ingest(format!("Failed to read file: {}", e)))?;

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Ingest(format!("PDF extraction aborted: {}", e)))?
        .map_err(|e| AppError::Ingest(format!("PDF extraction failed: {}", e)))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Bring the stored documents in line with the files in `dir`.
pub async fn sync_directory(repo: &Repository, dir: &Path) -> Result<SyncReport, AppError> {
    let mut report = SyncReport::default();

    if !dir.is_dir() {
        tracing::warn!("Documents directory {:?} not found; keeping stored documents", dir);
        return Ok(report);
    }

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(extension) = extension_of(&path) else {
            continue;
        };
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str())
            || !entry.file_type().await?.is_file()
        {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push((name.to_string(), path, extension));
        }
    }
    files.sort();

    let present: HashSet<String> = files.iter().map(|(name, _, _)| name.clone()).collect();

    for (name, path, extension) in &files {
        let text = match load_text(path, extension).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Error loading {}: {}", name, e);
                report.skipped.push(name.clone());
                continue;
            }
        };

        let hash = content_hash(&text);
        if let Some(existing) = repo.get_document(name).await? {
            if existing.content_hash == hash {
                report.unchanged.push(name.clone());
                continue;
            }
        }

        let doc_type = identify_doc_type(name);
        let is_markdown = extension == "md";
        let pieces = chunk_text(&text, is_markdown)?;

        let chunks: Vec<DocumentChunk> = pieces
            .into_iter()
            .enumerate()
            .map(|(position, content)| DocumentChunk {
                id: uuid::Uuid::new_v4().to_string(),
                source: name.clone(),
                doc_type,
                position: position as i64,
                content,
            })
            .collect();

        let document = Document {
            source: name.clone(),
            doc_type,
            content_hash: hash,
            chunk_count: chunks.len() as i64,
            ingested_at: Utc::now().to_rfc3339(),
        };

        repo.replace_document(&document, &chunks).await?;
        tracing::info!(
            "Ingested {} ({}) as {} chunks",
            name,
            doc_type.as_str(),
            chunks.len()
        );

        report.chunks_written += chunks.len();
        report.ingested.push(name.clone());
    }

    for stored in repo.list_documents().await? {
        if !present.contains(&stored.source) {
            repo.delete_document(&stored.source).await?;
            tracing::info!("Removed {} (file no longer present)", stored.source);
            report.removed.push(stored.source);
        }
    }

    Ok(report)
}

/// Sync the documents directory and rebuild the search index from SQLite.
pub async fn reindex(
    repo: &Repository,
    search: &SearchIndex,
    dir: &Path,
) -> Result<SyncReport, AppError> {
    let mut report = sync_directory(repo, dir).await?;

    let chunks = repo.list_chunks().await?;
    search.rebuild(&chunks).await?;
    report.indexed_chunks = chunks.len();

    Ok(report)
}
