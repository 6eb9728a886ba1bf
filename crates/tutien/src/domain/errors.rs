//! Domain Errors
//!
//! Error types for domain operations. The message pipeline itself is
//! total; these only surface while building a persona or a memory log
//! from configuration.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {key}: {reason}")]
    Config { key: String, reason: String },
}

impl DomainError {
    pub fn config<K: AsRef<str>, R: Into<String>>(key: K, reason: R) -> Self {
        Self::Config {
            key: key.as_ref().to_string(),
            reason: reason.into(),
        }
    }
}
