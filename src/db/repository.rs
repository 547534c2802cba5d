//! Database repository for CRUD operations.
//!
//! Uses prepared statements and transactions for data integrity.

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    ConsentRecord, Conversation, CreateConsentRequest, DocType, Document, DocumentChunk, Intent,
    Message, ReplySource, Role,
};

/// A cached reply as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedRow {
    pub response: String,
    pub intent: Option<Intent>,
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== CONVERSATION OPERATIONS ====================

    /// Create a new, empty conversation.
    pub async fn create_conversation(&self, channel: &str) -> Result<Conversation, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO conversations (id, channel, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(channel)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Conversation {
            id,
            channel: channel.to_string(),
            created_at: now.clone(),
            updated_at: now,
            message_count: 0,
        })
    }

    /// Get a conversation by ID.
    pub async fn get_conversation(&self, id: &str) -> Result<Option<Conversation>, AppError> {
        let row = sqlx::query(
            r#"SELECT c.id, c.channel, c.created_at, c.updated_at,
                      (SELECT COUNT(*) FROM messages m WHERE m.conversation_id = c.id) AS message_count
               FROM conversations c WHERE c.id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(conversation_from_row))
    }

    /// Store a visitor message and the reply to it in one transaction, and
    /// bump the conversation's update time.
    pub async fn append_exchange(
        &self,
        conversation_id: &str,
        question: &str,
        answer: &str,
        intent: Option<Intent>,
        source: ReplySource,
    ) -> Result<(Message, Message), AppError> {
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE conversations SET updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(conversation_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Conversation {} not found",
                conversation_id
            )));
        }

        let next_seq: i64 = sqlx::query(
            "SELECT COALESCE(MAX(seq), 0) + 1 AS next_seq FROM messages WHERE conversation_id = ?",
        )
        .bind(conversation_id)
        .fetch_one(&mut *tx)
        .await?
        .get("next_seq");

        let user = Message {
            id: uuid::Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            role: Role::User,
            content: question.to_string(),
            intent: None,
            source: None,
            created_at: now.clone(),
        };
        insert_message(&mut *tx, &user, next_seq).await?;

        let assistant = Message {
            id: uuid::Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            role: Role::Assistant,
            content: answer.to_string(),
            intent,
            source: Some(source),
            created_at: now,
        };
        insert_message(&mut *tx, &assistant, next_seq + 1).await?;

        tx.commit().await?;

        Ok((user, assistant))
    }

    /// List the messages of a conversation in the order they were written.
    pub async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query(
            "SELECT id, conversation_id, role, content, intent, source, created_at FROM messages WHERE conversation_id = ? ORDER BY seq",
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }

    // ==================== CACHE OPERATIONS ====================

    /// Get an unexpired cached reply.
    pub async fn get_cached(&self, key: &str, now: i64) -> Result<Option<CachedRow>, AppError> {
        let row = sqlx::query(
            "SELECT response, intent FROM response_cache WHERE key = ? AND expires_at > ?",
        )
        .bind(key)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| CachedRow {
            response: row.get("response"),
            intent: parse_intent(row.get("intent")),
        }))
    }

    /// Insert or overwrite a cached reply.
    pub async fn put_cached(
        &self,
        key: &str,
        input: &str,
        response: &str,
        intent: Option<Intent>,
        expires_at: i64,
    ) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO response_cache (key, input, response, intent, created_at, expires_at)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT(key) DO UPDATE SET
                   input = excluded.input,
                   response = excluded.response,
                   intent = excluded.intent,
                   created_at = excluded.created_at,
                   expires_at = excluded.expires_at"#,
        )
        .bind(key)
        .bind(input)
        .bind(response)
        .bind(intent.map(|i| i.as_str()))
        .bind(&now)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete every cached reply, returning how many were removed.
    pub async fn clear_cache(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM response_cache")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete cached replies whose TTL has elapsed.
    pub async fn purge_expired_cache(&self, now: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM response_cache WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ==================== DOCUMENT OPERATIONS ====================

    /// List all ingested documents.
    pub async fn list_documents(&self) -> Result<Vec<Document>, AppError> {
        let rows = sqlx::query(
            "SELECT source, doc_type, content_hash, chunk_count, ingested_at FROM documents ORDER BY source",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(document_from_row).collect())
    }

    /// Get an ingested document by its file name.
    pub async fn get_document(&self, source: &str) -> Result<Option<Document>, AppError> {
        let row = sqlx::query(
            "SELECT source, doc_type, content_hash, chunk_count, ingested_at FROM documents WHERE source = ?",
        )
        .bind(source)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(document_from_row))
    }

    /// Store a document, replacing any chunks previously stored for it.
    pub async fn replace_document(
        &self,
        document: &Document,
        chunks: &[DocumentChunk],
    ) -> Result<(), AppError> {
        // Use a transaction for atomicity
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM document_chunks WHERE source = ?")
            .bind(&document.source)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"INSERT INTO documents (source, doc_type, content_hash, chunk_count, ingested_at)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT(source) DO UPDATE SET
                   doc_type = excluded.doc_type,
                   content_hash = excluded.content_hash,
                   chunk_count = excluded.chunk_count,
                   ingested_at = excluded.ingested_at"#,
        )
        .bind(&document.source)
        .bind(document.doc_type.as_str())
        .bind(&document.content_hash)
        .bind(document.chunk_count)
        .bind(&document.ingested_at)
        .execute(&mut *tx)
        .await?;

        for chunk in chunks {
            sqlx::query(
                "INSERT INTO document_chunks (id, source, doc_type, position, content) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&chunk.id)
            .bind(&chunk.source)
            .bind(chunk.doc_type.as_str())
            .bind(chunk.position)
            .bind(&chunk.content)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a document and its chunks.
    pub async fn delete_document(&self, source: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM document_chunks WHERE source = ?")
            .bind(source)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM documents WHERE source = ?")
            .bind(source)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Document {} not found", source)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// List every stored chunk, grouped by document.
    pub async fn list_chunks(&self) -> Result<Vec<DocumentChunk>, AppError> {
        let rows = sqlx::query(
            "SELECT id, source, doc_type, position, content FROM document_chunks ORDER BY source, position",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(chunk_from_row).collect())
    }

    // ==================== CONSENT OPERATIONS ====================

    /// Record an accepted consent.
    pub async fn create_consent(
        &self,
        request: &CreateConsentRequest,
        terms_version: &str,
    ) -> Result<ConsentRecord, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO consents (
                id, conversation_id, full_name, document_number, email, phone,
                is_guardian, minor_name, accepts_terms, accepts_risks, accepts_image_use,
                terms_version, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&request.conversation_id)
        .bind(request.full_name.trim())
        .bind(&request.document_number)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.is_guardian as i32)
        .bind(&request.minor_name)
        .bind(request.accepts_terms as i32)
        .bind(request.accepts_risks as i32)
        .bind(request.accepts_image_use as i32)
        .bind(terms_version)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ConsentRecord {
            id,
            conversation_id: request.conversation_id.clone(),
            full_name: request.full_name.trim().to_string(),
            document_number: request.document_number.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            is_guardian: request.is_guardian,
            minor_name: request.minor_name.clone(),
            accepts_terms: request.accepts_terms,
            accepts_risks: request.accepts_risks,
            accepts_image_use: request.accepts_image_use,
            terms_version: terms_version.to_string(),
            created_at: now,
        })
    }

    /// Get a consent record by ID.
    pub async fn get_consent(&self, id: &str) -> Result<Option<ConsentRecord>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, conversation_id, full_name, document_number, email, phone,
                      is_guardian, minor_name, accepts_terms, accepts_risks, accepts_image_use,
                      terms_version, created_at
               FROM consents WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(consent_from_row))
    }

    /// List all consent records, newest first.
    pub async fn list_consents(&self) -> Result<Vec<ConsentRecord>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, conversation_id, full_name, document_number, email, phone,
                      is_guardian, minor_name, accepts_terms, accepts_risks, accepts_image_use,
                      terms_version, created_at
               FROM consents ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(consent_from_row).collect())
    }
}

async fn insert_message(
    conn: &mut SqliteConnection,
    message: &Message,
    seq: i64,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO messages (id, conversation_id, seq, role, content, intent, source, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&message.id)
    .bind(&message.conversation_id)
    .bind(seq)
    .bind(message.role.as_str())
    .bind(&message.content)
    .bind(message.intent.map(|i| i.as_str()))
    .bind(message.source.map(|s| s.as_str()))
    .bind(&message.created_at)
    .execute(conn)
    .await?;
    Ok(())
}

// ==================== ROW MAPPERS ====================

fn parse_intent(raw: Option<String>) -> Option<Intent> {
    raw.as_deref().and_then(Intent::from_str)
}

fn parse_doc_type(raw: &str) -> DocType {
    DocType::from_str(raw).unwrap_or(DocType::General)
}

fn conversation_from_row(row: &SqliteRow) -> Conversation {
    Conversation {
        id: row.get("id"),
        channel: row.get("channel"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        message_count: row.get("message_count"),
    }
}

fn message_from_row(row: &SqliteRow) -> Message {
    let role: String = row.get("role");
    let source: Option<String> = row.get("source");

    Message {
        id: row.get("id"),
        conversation_id: row.get("conversation_id"),
        role: Role::from_str(&role).unwrap_or(Role::User),
        content: row.get("content"),
        intent: parse_intent(row.get("intent")),
        source: source.as_deref().and_then(ReplySource::from_str),
        created_at: row.get("created_at"),
    }
}

fn document_from_row(row: &SqliteRow) -> Document {
    let doc_type: String = row.get("doc_type");

    Document {
        source: row.get("source"),
        doc_type: parse_doc_type(&doc_type),
        content_hash: row.get("content_hash"),
        chunk_count: row.get("chunk_count"),
        ingested_at: row.get("ingested_at"),
    }
}

fn chunk_from_row(row: &SqliteRow) -> DocumentChunk {
    let doc_type: String = row.get("doc_type");

    DocumentChunk {
        id: row.get("id"),
        source: row.get("source"),
        doc_type: parse_doc_type(&doc_type),
        position: row.get("position"),
        content: row.get("content"),
    }
}

fn consent_from_row(row: &SqliteRow) -> ConsentRecord {
    let is_guardian: i32 = row.get("is_guardian");
    let accepts_terms: i32 = row.get("accepts_terms");
    let accepts_risks: i32 = row.get("accepts_risks");
    let accepts_image_use: i32 = row.get("accepts_image_use");

    ConsentRecord {
        id: row.get("id"),
        conversation_id: row.get("conversation_id"),
        full_name: row.get("full_name"),
        document_number: row.get("document_number"),
        email: row.get("email"),
        phone: row.get("phone"),
        is_guardian: is_guardian != 0,
        minor_name: row.get("minor_name"),
        accepts_terms: accepts_terms != 0,
        accepts_risks: accepts_risks != 0,
        accepts_image_use: accepts_image_use != 0,
        terms_version: row.get("terms_version"),
        created_at: row.get("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn test_repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .unwrap();
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_messages_keep_insertion_order() {
        let (repo, _dir) = test_repo().await;
        let conversation = repo.create_conversation("web").await.unwrap();

        repo.append_exchange(
            &conversation.id,
            "precios",
            "💰 PRECIOS",
            Some(Intent::Prices),
            ReplySource::Faq,
        )
        .await
        .unwrap();
        repo.append_exchange(&conversation.id, "hola", "Lo siento", None, ReplySource::Generic)
            .await
            .unwrap();

        let messages = repo.list_messages(&conversation.id).await.unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "precios");
        assert!(messages[0].source.is_none());
        assert_eq!(messages[1].intent, Some(Intent::Prices));
        assert_eq!(messages[1].source, Some(ReplySource::Faq));
        assert_eq!(messages[2].content, "hola");
        assert_eq!(messages[3].source, Some(ReplySource::Generic));

        let stored = repo.get_conversation(&conversation.id).await.unwrap().unwrap();
        assert_eq!(stored.message_count, 4);
    }

    #[tokio::test]
    async fn test_append_to_unknown_conversation() {
        let (repo, _dir) = test_repo().await;
        let result = repo
            .append_exchange("missing", "hola", "Lo siento", None, ReplySource::Generic)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_reply_insert_keeps_no_question() {
        let (repo, _dir) = test_repo().await;
        let conversation = repo.create_conversation("web").await.unwrap();

        sqlx::query(
            r#"CREATE TRIGGER reject_assistant BEFORE INSERT ON messages
               WHEN NEW.role = 'assistant'
               BEGIN SELECT RAISE(ABORT, 'assistant insert rejected'); END"#,
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        let result = repo
            .append_exchange(&conversation.id, "precios", "💰 PRECIOS", None, ReplySource::Faq)
            .await;
        assert!(matches!(result, Err(AppError::Database(_))));

        assert!(repo.list_messages(&conversation.id).await.unwrap().is_empty());
        let stored = repo.get_conversation(&conversation.id).await.unwrap().unwrap();
        assert_eq!(stored.updated_at, conversation.updated_at);
    }

    #[tokio::test]
    async fn test_cache_expiry() {
        let (repo, _dir) = test_repo().await;

        repo.put_cached("k", "precios", "respuesta", Some(Intent::Prices), 100)
            .await
            .unwrap();

        let hit = repo.get_cached("k", 99).await.unwrap().unwrap();
        assert_eq!(hit.response, "respuesta");
        assert_eq!(hit.intent, Some(Intent::Prices));
        assert!(repo.get_cached("k", 100).await.unwrap().is_none());

        assert_eq!(repo.purge_expired_cache(100).await.unwrap(), 1);
        assert_eq!(repo.clear_cache().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_document_swaps_chunks() {
        let (repo, _dir) = test_repo().await;

        let chunk = |id: &str, position: i64, content: &str| DocumentChunk {
            id: id.to_string(),
            source: "reglamento.txt".to_string(),
            doc_type: DocType::Reglamento,
            position,
            content: content.to_string(),
        };
        let mut document = Document {
            source: "reglamento.txt".to_string(),
            doc_type: DocType::Reglamento,
            content_hash: "a".to_string(),
            chunk_count: 2,
            ingested_at: Utc::now().to_rfc3339(),
        };

        repo.replace_document(&document, &[chunk("1", 0, "uno"), chunk("2", 1, "dos")])
            .await
            .unwrap();
        assert_eq!(repo.list_chunks().await.unwrap().len(), 2);

        document.content_hash = "b".to_string();
        document.chunk_count = 1;
        repo.replace_document(&document, &[chunk("3", 0, "tres")])
            .await
            .unwrap();

        let chunks = repo.list_chunks().await.unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "tres");
        let stored = repo.get_document("reglamento.txt").await.unwrap().unwrap();
        assert_eq!(stored.content_hash, "b");

        repo.delete_document("reglamento.txt").await.unwrap();
        assert!(repo.list_documents().await.unwrap().is_empty());
        assert!(repo.list_chunks().await.unwrap().is_empty());
    }
}
