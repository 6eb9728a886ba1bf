//! Tu Tien Domain Library
//!
//! Core domain types and logic for the Tu Tien companion: a persona who
//! answers chat messages with templated replies flavoured by her mood and
//! cultivation lore.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Persona, Classification, Exchange, MemoryLog, CultivationStageTable
//!   - `value_objects/`: Sentiment, Urgency, Mood, ResponseCategory, StageAttributes
//!   - `services/`: classifier, responder, lore
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Clock
//!
//! # Usage
//!
//! ```rust,ignore
//! use tutien::{classify, select_category, render, Persona};
//!
//! let persona = Persona::default();
//! let classification = classify("Xin chào");
//! let category = select_category(&classification);
//! let text = render(category, &persona, Some("Minh"), &mut rand::thread_rng());
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::services::{classifier, lore, responder};
pub use domain::services::{classify, render, select_category, DEFAULT_CALLER_NAME};
pub use domain::{
    Classification, CultivationStageTable, DomainError, Exchange, IntentFlags, MemoryLog, Mood,
    Persona, ResponseCategory, Sentiment, StageAttributes, Urgency, DEFAULT_CULTIVATION_LEVEL,
    DEFAULT_PERSONA_NAME,
};
pub use ports::{Clock, FixedClock};
