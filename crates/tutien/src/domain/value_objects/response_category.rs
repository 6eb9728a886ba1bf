//! ResponseCategory - Which family of reply templates answers a message

use serde::{Deserialize, Serialize};

/// Reply category selected from a classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Greeting,
    CultivationAdvice,
    HelpfulGuidance,
    EmotionalSupport,
    UrgentHelp,
    #[default]
    GeneralChat,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 6] = [
        ResponseCategory::Greeting,
        ResponseCategory::CultivationAdvice,
        ResponseCategory::HelpfulGuidance,
        ResponseCategory::EmotionalSupport,
        ResponseCategory::UrgentHelp,
        ResponseCategory::GeneralChat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Greeting => "greeting",
            ResponseCategory::CultivationAdvice => "cultivation_advice",
            ResponseCategory::HelpfulGuidance => "helpful_guidance",
            ResponseCategory::EmotionalSupport => "emotional_support",
            ResponseCategory::UrgentHelp => "urgent_help",
            ResponseCategory::GeneralChat => "general_chat",
        }
    }
}

impl std::fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResponseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ResponseCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| format!("Unknown response category: {}", s))
    }
}
