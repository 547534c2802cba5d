//! Configuration module for the assistant backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key protecting the admin API
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Path to Tantivy search index directory
    pub index_path: PathBuf,
    /// Directory holding the club documents (.txt / .md)
    pub docs_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Whether replies are cached in SQLite
    pub cache_enabled: bool,
    /// Number of document chunks consulted per question
    pub search_results: usize,
    /// Maximum accepted length of a chat message, in characters
    pub max_message_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_psk: None,
            db_path: PathBuf::from("./data/chatbot.sqlite"),
            index_path: PathBuf::from("./data/index"),
            docs_path: PathBuf::from("./docs"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cache_enabled: true,
            search_results: 2,
            max_message_len: 1000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let api_psk = env::var("MNM_API_PSK").ok().filter(|k| !k.is_empty());

        let db_path = env::var("MNM_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let index_path = env::var("MNM_INDEX_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.index_path);

        let docs_path = env::var("MNM_DOCS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.docs_path);

        let bind_addr = match env::var("MNM_BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::Validation(format!("Invalid MNM_BIND_ADDR format: {}", raw))
            })?,
            Err(_) => defaults.bind_addr,
        };

        let log_level = env::var("MNM_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match env::var("MNM_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let cache_enabled = match env::var("MNM_CACHE_ENABLED") {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Validation(format!("Invalid MNM_CACHE_ENABLED value: {}", raw))
            })?,
            Err(_) => defaults.cache_enabled,
        };

        let search_results = parse_usize("MNM_SEARCH_RESULTS", defaults.search_results)?;
        let max_message_len = parse_usize("MNM_MAX_MESSAGE_LEN", defaults.max_message_len)?;

        Ok(Self {
            api_psk,
            db_path,
            index_path,
            docs_path,
            bind_addr,
            log_level,
            log_format,
            cache_enabled,
            search_results,
            max_message_len,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_usize(var: &str, default: usize) -> Result<usize, AppError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::Validation(format!("Invalid {} value: {}", var, raw))),
        Err(_) => Ok(default),
    }
}
