//! Data models for the club assistant.
//!
//! Field names serialize as camelCase to match the chat widget contract.

mod chat;
mod consent;
mod document;
mod faq;

pub use chat::*;
pub use consent::*;
pub use document::*;
pub use faq::*;
