//! Message Classifier
//!
//! Keyword-based reading of a message: four intent flags, a sentiment
//! and an urgency level. Matching is plain substring search on the
//! lower-cased text with no word boundaries, so "hi" also matches
//! inside "this".

use crate::domain::entities::{Classification, IntentFlags};
use crate::domain::value_objects::{Sentiment, Urgency};

const CULTIVATION_KEYWORDS: &[&str] = &["tu luyện", "cảnh giới", "linh lực", "đan dược", "pháp bảo"];
const HELP_KEYWORDS: &[&str] = &["giúp", "hỗ trợ", "làm sao", "cách nào", "hướng dẫn"];
const EMOTION_KEYWORDS: &[&str] = &["buồn", "vui", "lo lắng", "sợ hãi", "tức giận", "hạnh phúc"];
const GREETING_KEYWORDS: &[&str] = &["chào", "xin chào", "hello", "hi", "chào bạn"];

const POSITIVE_WORDS: &[&str] = &["vui", "hạnh phúc", "tuyệt", "tốt", "hay", "thích", "yêu"];
const NEGATIVE_WORDS: &[&str] = &["buồn", "tức giận", "lo lắng", "sợ", "xấu", "ghét", "khó"];

const URGENT_WORDS: &[&str] = &["khẩn cấp", "gấp", "ngay", "nhanh", "cứu", "giúp"];

/// Triggers the cultivation tip appended to a reply
pub const CULTIVATION_TIP_TRIGGER: &str = "tu luyện";

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Sum of non-overlapping occurrences of every word
fn count_occurrences(text: &str, words: &[&str]) -> usize {
    words.iter().map(|w| text.matches(w).count()).sum()
}

/// Classify a message. Never fails; empty or unmatched input is
/// neutral, low urgency, no flags.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let intent = IntentFlags {
        is_cultivation_question: contains_any(&lower, CULTIVATION_KEYWORDS),
        is_help_request: contains_any(&lower, HELP_KEYWORDS),
        is_emotional: contains_any(&lower, EMOTION_KEYWORDS),
        is_greeting: contains_any(&lower, GREETING_KEYWORDS),
    };

    Classification {
        sentiment: sentiment_of(&lower),
        urgency: urgency_of(&lower),
        intent,
    }
}

fn sentiment_of(lower: &str) -> Sentiment {
    let positive = count_occurrences(lower, POSITIVE_WORDS);
    let negative = count_occurrences(lower, NEGATIVE_WORDS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn urgency_of(lower: &str) -> Urgency {
    if contains_any(lower, URGENT_WORDS) {
        Urgency::High
    } else if lower.contains('?') || lower.contains('!') {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Whether the message should get a cultivation tip
pub fn wants_cultivation_tip(text: &str) -> bool {
    text.to_lowercase().contains(CULTIVATION_TIP_TRIGGER)
}
