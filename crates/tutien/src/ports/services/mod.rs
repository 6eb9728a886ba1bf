//! Service Ports
//!
//! Abstract interfaces for external services.

mod clock;

pub use clock::*;
