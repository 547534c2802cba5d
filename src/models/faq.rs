//! Quick query and welcome models.

use serde::Serialize;

/// A predefined question offered as a one-tap suggestion.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuickQuery {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Greeting shown when a visitor opens the chat.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Welcome {
    pub assistant_name: &'static str,
    pub club_name: &'static str,
    pub greeting: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub quick_queries: Vec<QuickQuery>,
}
