//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Classification: What a message was read as
//! - Persona: The companion's identity, traits and mood
//! - CultivationStageTable: Stage name -> lore scores
//! - Exchange: One remembered turn
//! - MemoryLog: Bounded history of exchanges

mod classification;
mod cultivation_stage;
mod exchange;
mod memory_log;
mod persona;

pub use classification::*;
pub use cultivation_stage::*;
pub use exchange::*;
pub use memory_log::*;
pub use persona::*;
