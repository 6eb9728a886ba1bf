//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations around the shared persona state.

mod companion_service;

pub use companion_service::{ChatReply, CompanionService, CompanionStatus, LoreSample};
