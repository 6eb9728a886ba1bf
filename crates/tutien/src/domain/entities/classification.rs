//! Classification - What the keyword classifier saw in a message
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Sentiment, Urgency};

/// Intent flags; not mutually exclusive
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentFlags {
    pub is_cultivation_question: bool,
    pub is_help_request: bool,
    pub is_emotional: bool,
    pub is_greeting: bool,
}

/// Classification of a single incoming message
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub urgency: Urgency,
    pub intent: IntentFlags,
}

impl Classification {
    pub fn is_greeting(&self) -> bool {
        self.intent.is_greeting
    }

    pub fn is_cultivation_question(&self) -> bool {
        self.intent.is_cultivation_question
    }

    pub fn is_help_request(&self) -> bool {
        self.intent.is_help_request
    }

    pub fn is_emotional(&self) -> bool {
        self.intent.is_emotional
    }
}
