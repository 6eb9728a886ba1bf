//! Companion configuration
//!
//! Read from Shuttle secrets (`Secrets.toml` locally). Every key is
//! optional; missing keys fall back to the built-in persona.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shuttle_runtime::SecretStore;

use tutien::{
    DomainError, MemoryLog, Persona, DEFAULT_CALLER_NAME, DEFAULT_CULTIVATION_LEVEL,
    DEFAULT_PERSONA_NAME,
};

pub const PERSONA_NAME_KEY: &str = "PERSONA_NAME";
pub const CULTIVATION_LEVEL_KEY: &str = "CULTIVATION_LEVEL";
pub const MEMORY_CAPACITY_KEY: &str = "MEMORY_CAPACITY";
pub const RNG_SEED_KEY: &str = "RNG_SEED";
pub const DEFAULT_CALLER_NAME_KEY: &str = "DEFAULT_CALLER_NAME";

/// Configuration for the companion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionConfig {
    pub persona_name: String,
    pub cultivation_level: String,
    /// Maximum number of remembered exchanges
    pub memory_capacity: usize,
    /// Fixed seed for reproducible replies; entropy when absent
    pub rng_seed: Option<u64>,
    /// How the persona addresses callers that give no username
    pub default_caller_name: String,
}

impl CompanionConfig {
    /// Load configuration from Shuttle secrets
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, DomainError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Load configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let memory_capacity = match get(MEMORY_CAPACITY_KEY) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| DomainError::config(MEMORY_CAPACITY_KEY, e.to_string()))?,
            None => MemoryLog::DEFAULT_CAPACITY,
        };
        if memory_capacity == 0 {
            return Err(DomainError::config(MEMORY_CAPACITY_KEY, "must be at least 1"));
        }

        let rng_seed = get(RNG_SEED_KEY)
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|e| DomainError::config(RNG_SEED_KEY, e.to_string()))
            })
            .transpose()?;

        Ok(Self {
            persona_name: get(PERSONA_NAME_KEY).unwrap_or_else(|| DEFAULT_PERSONA_NAME.to_string()),
            cultivation_level: get(CULTIVATION_LEVEL_KEY)
                .unwrap_or_else(|| DEFAULT_CULTIVATION_LEVEL.to_string()),
            memory_capacity,
            rng_seed,
            default_caller_name: get(DEFAULT_CALLER_NAME_KEY)
                .unwrap_or_else(|| DEFAULT_CALLER_NAME.to_string()),
        })
    }

    /// Set the persona name
    pub fn with_persona_name(mut self, name: impl Into<String>) -> Self {
        self.persona_name = name.into();
        self
    }

    /// Set a fixed RNG seed
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn build_persona(&self) -> Result<Persona, DomainError> {
        Persona::new(self.persona_name.clone(), self.cultivation_level.clone())
    }

    pub fn build_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            persona_name: DEFAULT_PERSONA_NAME.to_string(),
            cultivation_level: DEFAULT_CULTIVATION_LEVEL.to_string(),
            memory_capacity: MemoryLog::DEFAULT_CAPACITY,
            rng_seed: None,
            default_caller_name: DEFAULT_CALLER_NAME.to_string(),
        }
    }
}
