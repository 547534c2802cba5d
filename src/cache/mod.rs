//! Reply cache backed by the `response_cache` table.
//!
//! Failures never reach the caller: they are logged and treated as misses.

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::db::Repository;
use crate::models::Intent;

const KEY_PREFIX: &str = "chatbot_response:";

/// Time-to-live of a cached reply per source, in seconds.
pub const TTL_FAQ_SECS: i64 = 7200;
pub const TTL_DOCUMENTS_SECS: i64 = 3600;
pub const TTL_GENERIC_SECS: i64 = 1800;

/// A reply served from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedReply {
    pub text: String,
    pub intent: Option<Intent>,
}

/// Normalized-input reply cache with per-entry TTL.
#[derive(Clone)]
pub struct ResponseCache {
    repo: Arc<Repository>,
    enabled: bool,
}

impl ResponseCache {
    pub fn new(repo: Arc<Repository>, enabled: bool) -> Self {
        if !enabled {
            tracing::info!("Response cache disabled");
        }
        Self { repo, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cache key for an input: trimmed and lowercased before hashing.
    pub fn key_for(input: &str) -> String {
        let normalized = input.trim().to_lowercase();
        let digest = Sha256::digest(normalized.as_bytes());
        format!("{}{:x}", KEY_PREFIX, digest)
    }

    /// Look up an unexpired reply.
    pub async fn get(&self, input: &str) -> Option<CachedReply> {
        if !self.enabled {
            return None;
        }

        let key = Self::key_for(input);
        match self.repo.get_cached(&key, Utc::now().timestamp()).await {
            Ok(Some(row)) => {
                tracing::debug!(input = %preview(input), "Cache HIT");
                Some(CachedReply {
                    text: row.response,
                    intent: row.intent,
                })
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read reply cache: {}", e);
                None
            }
        }
    }

    /// Store a reply for `ttl_secs`. Returns whether it was stored.
    pub async fn set(
        &self,
        input: &str,
        text: &str,
        intent: Option<Intent>,
        ttl_secs: i64,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        let key = Self::key_for(input);
        let expires_at = Utc::now().timestamp() + ttl_secs;
        match self
            .repo
            .put_cached(&key, input, text, intent, expires_at)
            .await
        {
            Ok(()) => {
                tracing::debug!(input = %preview(input), ttl_secs, "Cache SAVE");
                true
            }
            Err(e) => {
                tracing::warn!("Failed to write reply cache: {}", e);
                false
            }
        }
    }

    /// Remove every cached reply. Returns the number removed, or `None` when
    /// the cache is disabled or unavailable.
    pub async fn clear(&self) -> Option<u64> {
        if !self.enabled {
            return None;
        }

        match self.repo.clear_cache().await {
            Ok(removed) => {
                tracing::info!("Reply cache cleared: {} entries removed", removed);
                Some(removed)
            }
            Err(e) => {
                tracing::warn!("Failed to clear reply cache: {}", e);
                None
            }
        }
    }

    /// Drop expired entries.
    pub async fn purge_expired(&self) -> u64 {
        match self.repo.purge_expired_cache(Utc::now().timestamp()).await {
            Ok(removed) => removed,
            Err(e) => {
                tracing::warn!("Failed to purge reply cache: {}", e);
                0
            }
        }
    }
}

fn preview(input: &str) -> String {
    input.chars().take(50).collect()
}
