//! Memory Log - Bounded rolling history of exchanges
//!
//! Oldest exchanges are evicted first once capacity is reached.
//! Nothing is persisted; the log lives as long as its owner.

use std::collections::VecDeque;

use serde::Serialize;

use super::Exchange;
use crate::domain::errors::DomainError;

/// Bounded FIFO log of recent exchanges
#[derive(Debug, Clone, Serialize)]
pub struct MemoryLog {
    capacity: usize,
    entries: VecDeque<Exchange>,
}

impl MemoryLog {
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Create an empty log holding at most `capacity` exchanges
    pub fn with_capacity(capacity: usize) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::Validation(
                "memory capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        })
    }

    /// Append an exchange, evicting from the front until the log fits
    pub fn append(&mut self, exchange: Exchange) {
        self.entries.push_back(exchange);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Snapshot of all exchanges, oldest first
    pub fn list(&self) -> Vec<Exchange> {
        self.entries.iter().cloned().collect()
    }

    /// The last `limit` exchanges, oldest first
    pub fn recent(&self, limit: usize) -> Vec<Exchange> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Drop every exchange, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            entries: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Mood;
    use chrono::Utc;

    fn exchange(n: usize) -> Exchange {
        Exchange::new(Utc::now(), format!("message {n}"), format!("reply {n}"), Mood::Calm)
    }

    #[test]
    fn test_append_keeps_last_hundred_in_order() {
        let mut log = MemoryLog::default();
        for n in 0..150 {
            log.append(exchange(n));
        }

        assert_eq!(log.len(), 100);
        let messages: Vec<String> = log.list().into_iter().map(|e| e.user_message).collect();
        let expected: Vec<String> = (50..150).map(|n| format!("message {n}")).collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn test_small_capacity_evicts_oldest() {
        let mut log = MemoryLog::with_capacity(2).unwrap();
        log.append(exchange(1));
        log.append(exchange(2));
        log.append(exchange(3));

        let list = log.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].user_message, "message 2");
        assert_eq!(list[1].user_message, "message 3");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            MemoryLog::with_capacity(0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_recent_returns_tail() {
        let mut log = MemoryLog::default();
        for n in 0..5 {
            log.append(exchange(n));
        }

        let tail = log.recent(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].user_message, "message 3");
        assert_eq!(tail[1].user_message, "message 4");
        assert_eq!(log.recent(50).len(), 5);
        assert!(log.recent(0).is_empty());
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = MemoryLog::default();
        log.append(exchange(1));
        log.append(exchange(2));

        assert_eq!(log.clear(), 2);
        assert!(log.is_empty());
        assert_eq!(log.clear(), 0);
    }
}
