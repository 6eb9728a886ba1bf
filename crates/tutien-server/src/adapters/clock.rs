//! System clock adapter

use chrono::{DateTime, Utc};

use tutien::Clock;

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
