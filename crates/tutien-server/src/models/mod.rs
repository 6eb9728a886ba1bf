//! Tu Tien API Data Models
//!
//! - Chat: message in, templated reply out
//! - Persona: personality, status and lore
//! - Memory: remembered exchanges

mod chat;
mod memory;
mod persona;

pub use chat::*;
pub use memory::*;
pub use persona::*;
