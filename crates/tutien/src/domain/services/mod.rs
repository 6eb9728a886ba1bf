//! Domain Services
//!
//! Stateless logic operating on domain entities.
//! - classifier: keyword reading of a message
//! - responder: category selection and template rendering
//! - lore: fixed flavour lists and samplers

pub mod classifier;
pub mod lore;
pub mod responder;

pub use classifier::classify;
pub use responder::{render, select_category, DEFAULT_CALLER_NAME};
