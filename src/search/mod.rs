//! Tantivy-based search index module.
//!
//! Provides full-text retrieval over club document chunks with a Spanish analyzer.

use std::path::Path;
use std::sync::Arc;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, STORED, STRING,
};
use tantivy::tokenizer::{
    AsciiFoldingFilter, Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer,
    StopWordFilter, TextAnalyzer,
};
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument};
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{DocType, DocumentChunk};

const TOKENIZER_NAME: &str = "es_club";

/// Words dropped before stemming. Matched after ASCII folding, so no accents.
const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "ante", "antes", "cada", "como", "con", "cual", "cuales", "de", "del",
    "desde", "donde", "e", "el", "ella", "ellos", "en", "entre", "era", "es", "esa", "ese",
    "eso", "esta", "estan", "estas", "este", "esto", "estos", "hay", "hola", "la", "las", "le",
    "les", "lo", "los", "mas", "me", "mi", "mis", "muy", "nos", "o", "para", "pero", "por",
    "porque", "que", "quien", "se", "si", "sin", "sobre", "son", "su", "sus", "te", "tu",
    "tus", "un", "una", "uno", "unos", "y", "ya", "yo",
];

/// A document chunk matching a query.
#[derive(Debug, Clone)]
pub struct DocumentHit {
    pub chunk_id: String,
    pub source: String,
    pub doc_type: DocType,
    pub content: String,
    pub score: f32,
}

/// Search index schema fields.
struct SearchFields {
    chunk_id: Field,
    source: Field,
    doc_type: Field,
    content: Field,
}

/// Tantivy search index for document chunks.
pub struct SearchIndex {
    index: Index,
    reader: IndexReader,
    writer: Arc<RwLock<IndexWriter>>,
    fields: SearchFields,
}

fn build_schema() -> Schema {
    let content_options = TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(TOKENIZER_NAME)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        )
        .set_stored();

    let mut schema_builder = Schema::builder();
    schema_builder.add_text_field("chunk_id", STRING | STORED);
    schema_builder.add_text_field("source", STRING | STORED);
    schema_builder.add_text_field("doc_type", STRING | STORED);
    schema_builder.add_text_field("content", content_options);
    schema_builder.build()
}

fn spanish_analyzer() -> TextAnalyzer {
    let stop_words = SPANISH_STOP_WORDS.iter().map(|w| w.to_string());

    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(RemoveLongFilter::limit(40))
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .filter(StopWordFilter::remove(stop_words))
        .filter(Stemmer::new(Language::Spanish))
        .build()
}

impl SearchIndex {
    /// Create or open a search index at the specified path.
    pub fn open(index_path: &Path) -> Result<Self, AppError> {
        std::fs::create_dir_all(index_path)
            .map_err(|e| AppError::Search(format!("Failed to create index directory: {}", e)))?;

        // Try to open existing index or create new one
        let index = Index::open_in_dir(index_path)
            .or_else(|_| Index::create_in_dir(index_path, build_schema()))
            .map_err(|e| AppError::Search(format!("Failed to open/create index: {}", e)))?;

        index.tokenizers().register(TOKENIZER_NAME, spanish_analyzer());

        let schema = index.schema();
        let field = |name: &str| {
            schema.get_field(name).map_err(|_| {
                AppError::Search(format!(
                    "Index at {} has an incompatible schema (missing field '{}'); remove it to rebuild",
                    index_path.display(),
                    name
                ))
            })
        };

        let fields = SearchFields {
            chunk_id: field("chunk_id")?,
            source: field("source")?,
            doc_type: field("doc_type")?,
            content: field("content")?,
        };

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()
            .map_err(|e| AppError::Search(format!("Failed to create reader: {}", e)))?;

        let writer = index
            .writer(50_000_000) // 50MB buffer
            .map_err(|e| AppError::Search(format!("Failed to create writer: {}", e)))?;

        Ok(Self {
            index,
            reader,
            writer: Arc::new(RwLock::new(writer)),
            fields,
        })
    }

    /// Rebuild the entire index from stored chunks.
    pub async fn rebuild(&self, chunks: &[DocumentChunk]) -> Result<(), AppError> {
        let mut writer = self.writer.write().await;

        // Clear existing index
        writer.delete_all_documents()?;

        for chunk in chunks {
            writer.add_document(doc!(
                self.fields.chunk_id => chunk.id.clone(),
                self.fields.source => chunk.source.clone(),
                self.fields.doc_type => chunk.doc_type.as_str(),
                self.fields.content => chunk.content.clone()
            ))?;
        }

        writer.commit()?;

        // Reload reader to see new documents
        self.reader.reload()?;

        tracing::info!("Search index rebuilt with {} chunks", chunks.len());
        Ok(())
    }

    /// Number of indexed chunks visible to searches.
    pub fn num_chunks(&self) -> usize {
        self.reader.searcher().num_docs() as usize
    }

    /// Search for chunks matching a free-form question.
    pub fn search(&self, query_str: &str, limit: usize) -> Result<Vec<DocumentHit>, AppError> {
        if query_str.trim().is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();

        let query_parser = QueryParser::for_index(&self.index, vec![self.fields.content]);

        // Visitors type questions, not query syntax.
        let (query, errors) = query_parser.parse_query_lenient(query_str);
        if !errors.is_empty() {
            tracing::debug!("Ignored {} query syntax errors in {:?}", errors.len(), query_str);
        }

        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(limit))
            .map_err(|e| AppError::Search(format!("Search failed: {}", e)))?;

        let hits = top_docs
            .into_iter()
            .filter_map(|(score, doc_address)| {
                let doc: TantivyDocument = searcher.doc(doc_address).ok()?;
                let text = |field: Field| -> Option<String> {
                    Some(doc.get_first(field)?.as_str()?.to_string())
                };

                Some(DocumentHit {
                    chunk_id: text(self.fields.chunk_id)?,
                    source: text(self.fields.source)?,
                    doc_type: DocType::from_str(&text(self.fields.doc_type)?)
                        .unwrap_or(DocType::General),
                    content: text(self.fields.content)?,
                    score,
                })
            })
            .collect();

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_chunk(id: &str, source: &str, doc_type: DocType, content: &str) -> DocumentChunk {
        DocumentChunk {
            id: id.to_string(),
            source: source.to_string(),
            doc_type,
            position: 0,
            content: content.to_string(),
        }
    }

    fn sample_chunks() -> Vec<DocumentChunk> {
        vec![
            create_test_chunk(
                "1",
                "reglamento.txt",
                DocType::Reglamento,
                "Política de reposición: puedes reponer una (1) clase por mes con aviso previo.",
            ),
            create_test_chunk(
                "2",
                "precios.txt",
                DocType::Precios,
                "La mensualidad de tres veces por semana cuesta $180,000.",
            ),
        ]
    }

    #[tokio::test]
    async fn test_search_index_creation() {
        let temp_dir = TempDir::new().unwrap();
        let index = SearchIndex::open(temp_dir.path()).unwrap();

        index.rebuild(&sample_chunks()).await.unwrap();
        assert_eq!(index.num_chunks(), 2);

        let results = index.search("¿Se pueden reponer clases?", 2).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].source, "reglamento.txt");
        assert_eq!(results[0].doc_type, DocType::Reglamento);
    }

    #[tokio::test]
    async fn test_search_folds_accents() {
        let temp_dir = TempDir::new().unwrap();
        let index = SearchIndex::open(temp_dir.path()).unwrap();
        index.rebuild(&sample_chunks()).await.unwrap();

        let results = index.search("reposicion", 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk_id, "1");
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let temp_dir = TempDir::new().unwrap();
        let index = SearchIndex::open(temp_dir.path()).unwrap();

        let results = index.search("", 10).unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_query_syntax_never_errors() {
        let temp_dir = TempDir::new().unwrap();
        let index = SearchIndex::open(temp_dir.path()).unwrap();
        index.rebuild(&sample_chunks()).await.unwrap();

        assert!(index.search("¿? (mensualidad", 5).is_ok());
        assert!(index.search("\"tres AND", 5).is_ok());
    }

    #[tokio::test]
    async fn test_rebuild_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let index = SearchIndex::open(temp_dir.path()).unwrap();
        index.rebuild(&sample_chunks()).await.unwrap();
        index.rebuild(&[]).await.unwrap();

        assert_eq!(index.num_chunks(), 0);
        assert!(index.search("mensualidad", 5).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reopen_existing_index() {
        let temp_dir = TempDir::new().unwrap();
        {
            let index = SearchIndex::open(temp_dir.path()).unwrap();
            index.rebuild(&sample_chunks()).await.unwrap();
        }

        let index = SearchIndex::open(temp_dir.path()).unwrap();
        assert_eq!(index.search("mensualidad", 5).unwrap().len(), 1);
    }
}
