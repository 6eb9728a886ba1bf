//! Clock Port
//!
//! Abstract source of wall-clock time. Classification and template
//! selection never read the clock; only the stamped reply and its
//! stored exchange do, so tests can pin time with a fixed clock.

use chrono::{DateTime, Utc};

/// Time source for reply and exchange timestamps
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
