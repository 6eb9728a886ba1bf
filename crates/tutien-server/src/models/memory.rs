//! Memory DTOs - Remembered exchanges

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use tutien::Exchange;

/// Query parameters for memory listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct MemoriesQuery {
    /// Only return the newest N exchanges
    pub limit: Option<usize>,
}

/// One remembered exchange
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExchangeResponse {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    pub ai_response: String,
    pub mood: String,
}

impl From<Exchange> for ExchangeResponse {
    fn from(exchange: Exchange) -> Self {
        Self {
            id: exchange.id,
            timestamp: exchange.timestamp,
            user_message: exchange.user_message,
            ai_response: exchange.ai_reply_text,
            mood: exchange.mood_at_time.to_string(),
        }
    }
}

/// Clear memories response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClearMemoriesResponse {
    pub success: bool,
    pub message: String,
    pub cleared: usize,
    pub timestamp: DateTime<Utc>,
}
