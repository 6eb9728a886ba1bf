//! StageAttributes - Lore scores attached to a cultivation stage

use serde::{Deserialize, Serialize};

/// Power, wisdom and mystery of a cultivation stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageAttributes {
    pub power: u64,
    pub wisdom: u8,
    pub mystery: u8,
}

impl StageAttributes {
    /// Returned when the persona's level names no known stage
    pub const UNKNOWN_STAGE: StageAttributes = StageAttributes::new(100, 50, 50);

    pub const fn new(power: u64, wisdom: u8, mystery: u8) -> Self {
        Self {
            power,
            wisdom,
            mystery,
        }
    }
}

impl Default for StageAttributes {
    fn default() -> Self {
        Self::UNKNOWN_STAGE
    }
}
