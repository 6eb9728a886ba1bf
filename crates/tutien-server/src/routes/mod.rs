//! Tu Tien API Routes
//!
//! - /api/ai/chat - One turn of conversation
//! - /api/ai/personality - Read and tune trait scores
//! - /api/ai/status - Persona, memory usage and self description
//! - /api/ai/lore - Random lore sample
//! - /api/ai/memories - Remembered exchanges

pub mod chat;
pub mod memory;
pub mod persona;
pub mod swagger;
