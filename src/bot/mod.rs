//! Chat engine: cache, curated answers, document lookup, generic fallback.

use std::sync::Arc;

use crate::cache::{ResponseCache, TTL_DOCUMENTS_SECS, TTL_FAQ_SECS, TTL_GENERIC_SECS};
use crate::db::Repository;
use crate::errors::AppError;
use crate::faq::{self, answers};
use crate::models::{ChatRequest, ChatResponse, Intent, ReplySource};
use crate::search::{DocumentHit, SearchIndex};

/// Retrieved context shorter than this is not worth showing.
const MIN_CONTEXT_CHARS: usize = 50;

const DEFAULT_CHANNEL: &str = "web";

/// An assistant reply before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub intent: Option<Intent>,
    pub source: ReplySource,
}

/// Engine settings taken from the application config.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    pub search_results: usize,
    pub max_message_len: usize,
}

/// Answers visitor messages and records the conversation.
pub struct ChatEngine {
    repo: Arc<Repository>,
    search: Arc<SearchIndex>,
    cache: ResponseCache,
    options: EngineOptions,
}

impl ChatEngine {
    pub fn new(
        repo: Arc<Repository>,
        search: Arc<SearchIndex>,
        cache: ResponseCache,
        options: EngineOptions,
    ) -> Self {
        Self {
            repo,
            search,
            cache,
            options,
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Produce a reply for a single input, without touching conversation history.
    pub async fn reply(&self, input: &str) -> Reply {
        if let Some(cached) = self.cache.get(input).await {
            return Reply {
                text: cached.text,
                intent: cached.intent,
                source: ReplySource::Cache,
            };
        }

        if let Some(answer) = faq::route(input) {
            self.cache
                .set(input, answer.text, Some(answer.intent), TTL_FAQ_SECS)
                .await;
            return Reply {
                text: answer.text.to_string(),
                intent: Some(answer.intent),
                source: ReplySource::Faq,
            };
        }

        tracing::debug!("No curated answer, searching documents");
        let context = self.document_context(input);
        if context.trim().chars().count() > MIN_CONTEXT_CHARS {
            let text = format!(
                "{}{}{}",
                answers::DOCUMENTS_HEADER,
                context,
                answers::DOCUMENTS_FOOTER
            );
            self.cache.set(input, &text, None, TTL_DOCUMENTS_SECS).await;
            return Reply {
                text,
                intent: None,
                source: ReplySource::Documents,
            };
        }

        tracing::debug!("No specific information found");
        self.cache
            .set(input, answers::GENERIC, None, TTL_GENERIC_SECS)
            .await;
        Reply {
            text: answers::GENERIC.to_string(),
            intent: None,
            source: ReplySource::Generic,
        }
    }

    /// Handle a chat message within a (possibly new) conversation.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("Message is required".to_string()));
        }
        if message.chars().count() > self.options.max_message_len {
            return Err(AppError::Validation(format!(
                "Message must be at most {} characters",
                self.options.max_message_len
            )));
        }

        let conversation = match &request.conversation_id {
            Some(id) => self
                .repo
                .get_conversation(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Conversation {} not found", id)))?,
            None => {
                let channel = request
                    .channel
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .unwrap_or(DEFAULT_CHANNEL);
                self.repo.create_conversation(channel).await?
            }
        };

        let reply = self.reply(message).await;
        tracing::info!(
            conversation_id = %conversation.id,
            source = reply.source.as_str(),
            intent = reply.intent.map(|i| i.as_str()).unwrap_or("none"),
            "Reply generated"
        );

        self.repo
            .append_exchange(
                &conversation.id,
                message,
                &reply.text,
                reply.intent,
                reply.source,
            )
            .await?;

        Ok(ChatResponse {
            conversation_id: conversation.id,
            reply: reply.text,
            intent: reply.intent,
            source: reply.source,
            suggestions: faq::quick_queries(),
        })
    }

    fn document_context(&self, input: &str) -> String {
        match self.search.search(input, self.options.search_results) {
            Ok(hits) => {
                tracing::debug!("Documents found: {}", hits.len());
                format_context(&hits)
            }
            Err(e) => {
                tracing::warn!("Document search failed: {}", e);
                String::new()
            }
        }
    }
}

fn format_context(hits: &[DocumentHit]) -> String {
    hits.iter()
        .map(|hit| format!("\n[{}]: {}\n", hit.doc_type.as_str(), hit.content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use crate::models::{DocType, DocumentChunk, Role};
    use tempfile::TempDir;

    struct Fixture {
        engine: ChatEngine,
        repo: Arc<Repository>,
        _temp_dir: TempDir,
    }

    async fn fixture(chunks: &[DocumentChunk], cache_enabled: bool) -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_database(&temp_dir.path().join("bot.sqlite"))
            .await
            .unwrap();
        let repo = Arc::new(Repository::new(pool));
        let search = Arc::new(SearchIndex::open(&temp_dir.path().join("index")).unwrap());
        search.rebuild(chunks).await.unwrap();

        let engine = ChatEngine::new(
            repo.clone(),
            search,
            ResponseCache::new(repo.clone(), cache_enabled),
            EngineOptions {
                search_results: 2,
                max_message_len: 200,
            },
        );

        Fixture {
            engine,
            repo,
            _temp_dir: temp_dir,
        }
    }

    fn locker_chunk() -> DocumentChunk {
        DocumentChunk {
            id: "c1".to_string(),
            source: "reglamento.txt".to_string(),
            doc_type: DocType::Reglamento,
            position: 0,
            content: "Los casilleros del vestier deben desocuparse al terminar cada sesión de entrenamiento."
                .to_string(),
        }
    }

    #[tokio::test]
    async fn test_faq_reply_is_cached() {
        let f = fixture(&[], true).await;

        let first = f.engine.reply("¿Cuáles son los precios?").await;
        assert_eq!(first.source, ReplySource::Faq);
        assert_eq!(first.intent, Some(Intent::Prices));

        let second = f.engine.reply("¿cuáles son los precios?  ").await;
        assert_eq!(second.source, ReplySource::Cache);
        assert_eq!(second.intent, Some(Intent::Prices));
        assert_eq!(second.text, first.text);
    }

    #[tokio::test]
    async fn test_cache_ttl_per_source() {
        let f = fixture(&[locker_chunk()], true).await;
        let before = chrono::Utc::now().timestamp();

        let cases = [
            ("precios", ReplySource::Faq, TTL_FAQ_SECS),
            ("casilleros del vestier", ReplySource::Documents, TTL_DOCUMENTS_SECS),
            ("hola", ReplySource::Generic, TTL_GENERIC_SECS),
        ];

        for (input, source, ttl) in cases {
            assert_eq!(f.engine.reply(input).await.source, source);

            let key = ResponseCache::key_for(input);
            let still_valid = f.repo.get_cached(&key, before + ttl - 60).await.unwrap();
            assert!(still_valid.is_some(), "{} expired too early", input);
            let expired = f.repo.get_cached(&key, before + ttl + 60).await.unwrap();
            assert!(expired.is_none(), "{} outlived its ttl", input);
        }
    }

    #[tokio::test]
    async fn test_document_reply() {
        let f = fixture(&[locker_chunk()], false).await;

        let reply = f.engine.reply("casilleros del vestier").await;
        assert_eq!(reply.source, ReplySource::Documents);
        assert!(reply.intent.is_none());
        assert!(reply.text.starts_with(answers::DOCUMENTS_HEADER));
        assert!(reply.text.contains("[reglamento]: Los casilleros"));
        assert!(reply.text.ends_with(answers::DOCUMENTS_FOOTER));
    }

    #[tokio::test]
    async fn test_generic_reply_without_documents() {
        let f = fixture(&[], false).await;

        let reply = f.engine.reply("hola").await;
        assert_eq!(reply.source, ReplySource::Generic);
        assert_eq!(reply.text, answers::GENERIC);
    }

    #[tokio::test]
    async fn test_short_context_falls_back_to_generic() {
        let chunk = DocumentChunk {
            content: "Vestier".to_string(),
            ..locker_chunk()
        };
        let f = fixture(&[chunk], false).await;

        let reply = f.engine.reply("vestier").await;
        assert_eq!(reply.source, ReplySource::Generic);
    }

    #[tokio::test]
    async fn test_chat_records_conversation() {
        let f = fixture(&[], true).await;

        let response = f
            .engine
            .chat(&ChatRequest {
                message: "  ¿Cómo me inscribo? ".to_string(),
                conversation_id: None,
                channel: None,
            })
            .await
            .unwrap();
        assert_eq!(response.intent, Some(Intent::Enrollment));
        assert_eq!(response.suggestions.len(), 9);

        let follow_up = f
            .engine
            .chat(&ChatRequest {
                message: "precios".to_string(),
                conversation_id: Some(response.conversation_id.clone()),
                channel: None,
            })
            .await
            .unwrap();
        assert_eq!(follow_up.conversation_id, response.conversation_id);

        let conversation = f
            .repo
            .get_conversation(&response.conversation_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(conversation.channel, "web");

        let messages = f.repo.list_messages(&response.conversation_id).await.unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].content, "¿Cómo me inscribo?");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].source, Some(ReplySource::Faq));
        assert_eq!(messages[3].intent, Some(Intent::Prices));
    }

    #[tokio::test]
    async fn test_chat_validation() {
        let f = fixture(&[], false).await;

        let blank = f
            .engine
            .chat(&ChatRequest {
                message: "   ".to_string(),
                conversation_id: None,
                channel: None,
            })
            .await;
        assert!(matches!(blank, Err(AppError::Validation(_))));

        let too_long = f
            .engine
            .chat(&ChatRequest {
                message: "a".repeat(201),
                conversation_id: None,
                channel: None,
            })
            .await;
        assert!(matches!(too_long, Err(AppError::Validation(_))));

        let unknown = f
            .engine
            .chat(&ChatRequest {
                message: "hola".to_string(),
                conversation_id: Some("missing".to_string()),
                channel: None,
            })
            .await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));
    }
}
