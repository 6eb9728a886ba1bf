//! Exchange - One remembered turn of conversation
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Mood;

/// A user message and the reply it received
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    pub id: Uuid,
    /// When the reply was produced (from the caller's clock)
    pub timestamp: DateTime<Utc>,
    /// The message exactly as the user sent it
    pub user_message: String,
    pub ai_reply_text: String,
    /// Persona mood after the turn
    pub mood_at_time: Mood,
}

impl Exchange {
    /// Create a new exchange with a generated ID
    pub fn new(
        timestamp: DateTime<Utc>,
        user_message: impl Into<String>,
        ai_reply_text: impl Into<String>,
        mood_at_time: Mood,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            user_message: user_message.into(),
            ai_reply_text: ai_reply_text.into(),
            mood_at_time,
        }
    }
}
