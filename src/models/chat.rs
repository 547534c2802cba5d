//! Conversation and message models.

use serde::{Deserialize, Serialize};

use super::QuickQuery;

/// Question categories the assistant answers from curated content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Enrollment,
    CycleFreeze,
    Consent,
    ScheduleChildren,
    ScheduleAdults,
    ScheduleGeneral,
    Prices,
    FirstClass,
    Methodology,
    Ages,
    Contact,
    MakeupPolicy,
    Regulations,
    Registration,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Enrollment => "enrollment",
            Intent::CycleFreeze => "cycle_freeze",
            Intent::Consent => "consent",
            Intent::ScheduleChildren => "schedule_children",
            Intent::ScheduleAdults => "schedule_adults",
            Intent::ScheduleGeneral => "schedule_general",
            Intent::Prices => "prices",
            Intent::FirstClass => "first_class",
            Intent::Methodology => "methodology",
            Intent::Ages => "ages",
            Intent::Contact => "contact",
            Intent::MakeupPolicy => "makeup_policy",
            Intent::Regulations => "regulations",
            Intent::Registration => "registration",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "enrollment" => Some(Intent::Enrollment),
            "cycle_freeze" => Some(Intent::CycleFreeze),
            "consent" => Some(Intent::Consent),
            "schedule_children" => Some(Intent::ScheduleChildren),
            "schedule_adults" => Some(Intent::ScheduleAdults),
            "schedule_general" => Some(Intent::ScheduleGeneral),
            "prices" => Some(Intent::Prices),
            "first_class" => Some(Intent::FirstClass),
            "methodology" => Some(Intent::Methodology),
            "ages" => Some(Intent::Ages),
            "contact" => Some(Intent::Contact),
            "makeup_policy" => Some(Intent::MakeupPolicy),
            "regulations" => Some(Intent::Regulations),
            "registration" => Some(Intent::Registration),
            _ => None,
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Cache,
    Faq,
    Documents,
    Generic,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Cache => "cache",
            ReplySource::Faq => "faq",
            ReplySource::Documents => "documents",
            ReplySource::Generic => "generic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cache" => Some(ReplySource::Cache),
            "faq" => Some(ReplySource::Faq),
            "documents" => Some(ReplySource::Documents),
            "generic" => Some(ReplySource::Generic),
            _ => None,
        }
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// A chat session with one visitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub channel: String,
    pub created_at: String,
    pub updated_at: String,
    pub message_count: i64,
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ReplySource>,
    pub created_at: String,
}

/// Request body for sending a chat message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Continue an existing conversation; a new one is created when absent
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// Reply to a chat message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub conversation_id: String,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    pub source: ReplySource,
    pub suggestions: Vec<QuickQuery>,
}
