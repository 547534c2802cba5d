//! Consent record models.

use serde::{Deserialize, Serialize};

/// An accepted set of terms, informed consent and image-use authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Signed by a parent or guardian on behalf of a minor
    pub is_guardian: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_name: Option<String>,
    pub accepts_terms: bool,
    pub accepts_risks: bool,
    pub accepts_image_use: bool,
    pub terms_version: String,
    pub created_at: String,
}

/// Request body for recording consent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsentRequest {
    #[serde(default)]
    pub conversation_id: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_guardian: bool,
    #[serde(default)]
    pub minor_name: Option<String>,
    #[serde(default)]
    pub accepts_terms: bool,
    #[serde(default)]
    pub accepts_risks: bool,
    #[serde(default)]
    pub accepts_image_use: bool,
}
