//! Cultivation Stage Table
//!
//! Maps stage names (e.g. "Nguyên Anh") to their lore scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StageAttributes;

/// The ten realms, from Qi Refining to Loose Immortal
const STANDARD_STAGES: [(&str, StageAttributes); 10] = [
    ("Luyện Khí", StageAttributes::new(100, 20, 10)),
    ("Trúc Cơ", StageAttributes::new(500, 40, 20)),
    ("Kết Đan", StageAttributes::new(2_000, 60, 40)),
    ("Nguyên Anh", StageAttributes::new(10_000, 80, 70)),
    ("Hóa Thần", StageAttributes::new(50_000, 90, 85)),
    ("Luyện Hư", StageAttributes::new(200_000, 95, 90)),
    ("Hợp Thể", StageAttributes::new(1_000_000, 98, 95)),
    ("Đại Thừa", StageAttributes::new(5_000_000, 99, 98)),
    ("Độ Kiếp", StageAttributes::new(20_000_000, 100, 99)),
    ("Tản Tiên", StageAttributes::new(100_000_000, 100, 100)),
];

/// Immutable stage name -> attributes lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CultivationStageTable {
    stages: BTreeMap<String, StageAttributes>,
}

impl CultivationStageTable {
    /// The standard ten-realm table
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_STAGES)
    }

    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, StageAttributes)>,
        K: Into<String>,
    {
        Self {
            stages: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, stage: &str) -> Option<StageAttributes> {
        self.stages.get(stage).copied()
    }

    /// Attributes for a full cultivation level such as "Kết Đan Tầng 5".
    ///
    /// Only the first whitespace-delimited token is used as the key, so
    /// multi-word stage names never match and the unknown-stage defaults
    /// apply. Kept that way for output parity.
    pub fn attributes_for_level(&self, cultivation_level: &str) -> StageAttributes {
        cultivation_level
            .split_whitespace()
            .next()
            .and_then(|stage| self.get(stage))
            .unwrap_or(StageAttributes::UNKNOWN_STAGE)
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for CultivationStageTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_ten_stages() {
        let table = CultivationStageTable::standard();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.get("Nguyên Anh"),
            Some(StageAttributes::new(10_000, 80, 70))
        );
    }

    #[test]
    fn test_multi_word_stage_falls_back_to_defaults() {
        let table = CultivationStageTable::standard();
        // First token is "Kết", which is not a key
        assert_eq!(
            table.attributes_for_level("Kết Đan Tầng 5"),
            StageAttributes::UNKNOWN_STAGE
        );
        assert_eq!(
            table.attributes_for_level("Nguyên Anh Tầng 3"),
            StageAttributes::new(100, 50, 50)
        );
    }

    #[test]
    fn test_single_token_key_resolves() {
        let table = CultivationStageTable::from_entries([
            ("Kết", StageAttributes::new(2_000, 60, 40)),
            ("Nguyên Anh", StageAttributes::new(10_000, 80, 70)),
        ]);
        assert_eq!(
            table.attributes_for_level("Kết Đan Tầng 5"),
            StageAttributes::new(2_000, 60, 40)
        );
        assert_eq!(
            table.attributes_for_level("Nguyên Anh Tầng 1"),
            StageAttributes::UNKNOWN_STAGE
        );
    }

    #[test]
    fn test_blank_level_uses_defaults() {
        let table = CultivationStageTable::standard();
        assert_eq!(table.attributes_for_level("   "), StageAttributes::UNKNOWN_STAGE);
    }
}
