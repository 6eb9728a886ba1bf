//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod mood;
mod response_category;
mod sentiment;
mod stage_attributes;
mod urgency;

pub use mood::*;
pub use response_category::*;
pub use sentiment::*;
pub use stage_attributes::*;
pub use urgency::*;
