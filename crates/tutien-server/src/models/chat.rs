//! Chat DTOs - One message in, one reply out

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ChatReply;
use tutien::Mood;

/// Category shown on the apologetic fallback reply
pub const ERROR_CATEGORY: &str = "error";

/// Chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// What the user said; anything but a non-blank string gets the apology
    pub message: Option<serde_json::Value>,
    /// Optional caller context; `username` names the caller
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

/// Chat response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub text: String,
    /// Reply category (`greeting`, `cultivation_advice`, ... or `error`)
    pub category: String,
    pub mood: String,
    pub cultivation_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_ability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wisdom_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mystery_level: Option<u8>,
    pub ai_name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultivation_tip: Option<String>,
}

impl ChatResponse {
    /// Fallback reply shown when a message cannot be answered
    pub fn apology(ai_name: &str, cultivation_level: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: format!("Xin lỗi! {ai_name} gặp chút khó khăn. Hãy thử lại sau nhé! 😅"),
            category: ERROR_CATEGORY.to_string(),
            mood: Mood::Confused.to_string(),
            cultivation_level: cultivation_level.to_string(),
            special_ability: None,
            wisdom_level: None,
            mystery_level: None,
            ai_name: ai_name.to_string(),
            timestamp,
            cultivation_tip: None,
        }
    }
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            text: reply.text,
            category: reply.category.to_string(),
            mood: reply.mood.to_string(),
            cultivation_level: reply.cultivation_level,
            special_ability: Some(reply.special_ability),
            wisdom_level: Some(reply.wisdom_level),
            mystery_level: Some(reply.mystery_level),
            ai_name: reply.ai_name,
            timestamp: reply.timestamp,
            cultivation_tip: reply.cultivation_tip,
        }
    }
}
