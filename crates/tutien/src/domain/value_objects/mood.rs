//! Mood - Current emotional state of the persona

use serde::{Deserialize, Serialize};

use super::{Sentiment, Urgency};

/// Persona mood
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Happy,
    Concerned,
    Alert,
    Calm,
    /// Only shown on the apologetic error reply
    Confused,
}

impl Mood {
    /// Mood a classified message leaves the persona in.
    ///
    /// Sentiment dominates; urgency only matters for neutral messages.
    pub fn after(sentiment: Sentiment, urgency: Urgency) -> Self {
        match (sentiment, urgency) {
            (Sentiment::Positive, _) => Mood::Happy,
            (Sentiment::Negative, _) => Mood::Concerned,
            (Sentiment::Neutral, Urgency::High) => Mood::Alert,
            (Sentiment::Neutral, _) => Mood::Calm,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Happy => write!(f, "happy"),
            Mood::Concerned => write!(f, "concerned"),
            Mood::Alert => write!(f, "alert"),
            Mood::Calm => write!(f, "calm"),
            Mood::Confused => write!(f, "confused"),
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "concerned" => Ok(Mood::Concerned),
            "alert" => Ok(Mood::Alert),
            "calm" => Ok(Mood::Calm),
            "confused" => Ok(Mood::Confused),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}
