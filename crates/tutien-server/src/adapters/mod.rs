//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod clock;

// Re-exports
pub use clock::SystemClock;
