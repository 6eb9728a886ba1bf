//! Persona - The companion's identity and mutable mood
//!
//! Pure domain entity without infrastructure dependencies.
//! Name, cultivation level and abilities are fixed after construction;
//! only the mood and trait scores change, and only through the methods
//! below.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use super::{Classification, CultivationStageTable};
use crate::domain::errors::DomainError;
use crate::domain::services::lore;
use crate::domain::value_objects::{Mood, StageAttributes};

pub const DEFAULT_PERSONA_NAME: &str = "Linh Nhi";
pub const DEFAULT_CULTIVATION_LEVEL: &str = "Nguyên Anh Tầng 3";

const TRAIT_MIN: u8 = 0;
const TRAIT_MAX: u8 = 100;

/// Trait name, threshold that must be exceeded, adjective used in the description
const TRAIT_ADJECTIVES: [(&str, u8, &str); 5] = [
    ("kindness", 90, "rất tốt bụng"),
    ("wisdom", 90, "rất khôn ngoan"),
    ("playfulness", 80, "vui tươi"),
    ("mysteriousness", 80, "bí ẩn"),
    ("helpfulness", 90, "rất hữu ích"),
];

fn default_traits() -> BTreeMap<String, u8> {
    [
        ("kindness", 95),
        ("wisdom", 88),
        ("playfulness", 75),
        ("mysteriousness", 80),
        ("helpfulness", 92),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Persona - The companion answering messages
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Persona {
    name: String,
    cultivation_level: String,
    trait_scores: BTreeMap<String, u8>,
    current_mood: Mood,
    abilities: Vec<String>,
    #[serde(skip)]
    stages: CultivationStageTable,
}

impl Persona {
    /// Create a persona with the default traits, abilities and stage table
    pub fn new(
        name: impl Into<String>,
        cultivation_level: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "persona name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            cultivation_level: cultivation_level.into(),
            ..Self::default()
        })
    }

    /// Replace the trait table; every score must already be within 0..=100
    pub fn with_traits(mut self, traits: BTreeMap<String, u8>) -> Result<Self, DomainError> {
        if let Some((name, score)) = traits.iter().find(|(_, v)| **v > TRAIT_MAX) {
            return Err(DomainError::Validation(format!(
                "trait {name} out of range: {score}"
            )));
        }
        self.trait_scores = traits;
        Ok(self)
    }

    /// Replace the ability list; it must not be empty
    pub fn with_abilities(mut self, abilities: Vec<String>) -> Result<Self, DomainError> {
        if abilities.is_empty() {
            return Err(DomainError::Validation(
                "persona needs at least one special ability".to_string(),
            ));
        }
        self.abilities = abilities;
        Ok(self)
    }

    pub fn with_stage_table(mut self, stages: CultivationStageTable) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.current_mood = mood;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cultivation_level(&self) -> &str {
        &self.cultivation_level
    }

    pub fn trait_scores(&self) -> &BTreeMap<String, u8> {
        &self.trait_scores
    }

    pub fn trait_score(&self, name: &str) -> Option<u8> {
        self.trait_scores.get(name).copied()
    }

    pub fn current_mood(&self) -> Mood {
        self.current_mood
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    /// Overwrite the mood from a classification; no blending with history
    pub fn update_mood(&mut self, classification: &Classification) {
        self.current_mood = Mood::after(classification.sentiment, classification.urgency);
    }

    /// Apply numeric trait updates, clamped to 0..=100.
    ///
    /// Keys that are not existing traits and values that are not numbers
    /// are skipped. Returns how many traits changed value.
    pub fn update_traits<'a, I>(&mut self, updates: I) -> usize
    where
        I: IntoIterator<Item = (&'a String, &'a serde_json::Value)>,
    {
        let mut changed = 0;
        for (key, value) in updates {
            let Some(score) = self.trait_scores.get_mut(key) else {
                continue;
            };
            let Some(number) = value.as_f64() else {
                continue;
            };
            let clamped = number
                .round()
                .clamp(f64::from(TRAIT_MIN), f64::from(TRAIT_MAX)) as u8;
            if *score != clamped {
                *score = clamped;
                changed += 1;
            }
        }
        changed
    }

    /// Power, wisdom and mystery of the current cultivation stage
    pub fn stage_attributes(&self) -> StageAttributes {
        self.stages.attributes_for_level(&self.cultivation_level)
    }

    pub fn can_use_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
    }

    /// First-person self introduction built from level, traits and mood
    pub fn description(&self) -> String {
        let adjectives: Vec<&str> = TRAIT_ADJECTIVES
            .iter()
            .filter(|(name, threshold, _)| {
                self.trait_score(name).is_some_and(|score| score > *threshold)
            })
            .map(|(_, _, adjective)| *adjective)
            .collect();

        let summary = if adjectives.is_empty() {
            "bình thường".to_string()
        } else {
            adjectives.join(", ")
        };

        format!(
            "Tôi là {}, một AI tu tiên với cảnh giới {}. Tôi có tính cách {}. Hiện tại tôi đang cảm thấy {}.",
            self.name, self.cultivation_level, summary, self.current_mood
        )
    }

    pub fn pick_random_ability<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        lore::pick(&self.abilities, rng).as_str()
    }

    pub fn pick_random_greeting<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        lore::random_greeting(rng)
    }

    pub fn pick_random_farewell<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        lore::random_farewell(rng)
    }

    pub fn pick_random_cultivation_advice<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        lore::random_cultivation_advice(rng)
    }

    pub fn pick_random_emotional_support<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        lore::random_emotional_support(rng)
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: DEFAULT_PERSONA_NAME.to_string(),
            cultivation_level: DEFAULT_CULTIVATION_LEVEL.to_string(),
            trait_scores: default_traits(),
            current_mood: Mood::default(),
            abilities: lore::DEFAULT_ABILITIES
                .iter()
                .map(|a| a.to_string())
                .collect(),
            stages: CultivationStageTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Sentiment, Urgency};
    use rand::rngs::mock::StepRng;
    use serde_json::json;

    fn updates(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap()
    }

    fn classified(sentiment: Sentiment, urgency: Urgency) -> Classification {
        Classification {
            sentiment,
            urgency,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_persona() {
        let persona = Persona::default();
        assert_eq!(persona.name(), "Linh Nhi");
        assert_eq!(persona.cultivation_level(), "Nguyên Anh Tầng 3");
        assert_eq!(persona.current_mood(), Mood::Happy);
        assert_eq!(persona.trait_score("kindness"), Some(95));
        assert_eq!(persona.abilities().len(), 10);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Persona::new("  ", DEFAULT_CULTIVATION_LEVEL).is_err());
    }

    #[test]
    fn test_empty_abilities_rejected() {
        let result = Persona::default().with_abilities(Vec::new());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_out_of_range_trait_seed_rejected() {
        let traits = BTreeMap::from([("kindness".to_string(), 101)]);
        assert!(Persona::default().with_traits(traits).is_err());
    }

    #[test]
    fn test_update_mood_transitions() {
        let mut persona = Persona::default();

        persona.update_mood(&classified(Sentiment::Negative, Urgency::High));
        assert_eq!(persona.current_mood(), Mood::Concerned);

        persona.update_mood(&classified(Sentiment::Neutral, Urgency::High));
        assert_eq!(persona.current_mood(), Mood::Alert);

        persona.update_mood(&classified(Sentiment::Positive, Urgency::Low));
        assert_eq!(persona.current_mood(), Mood::Happy);

        persona.update_mood(&classified(Sentiment::Neutral, Urgency::Medium));
        assert_eq!(persona.current_mood(), Mood::Calm);
    }

    #[test]
    fn test_update_traits_clamps() {
        let mut persona = Persona::default();

        persona.update_traits(&updates(json!({ "kindness": 150 })));
        assert_eq!(persona.trait_score("kindness"), Some(100));

        persona.update_traits(&updates(json!({ "kindness": -30 })));
        assert_eq!(persona.trait_score("kindness"), Some(0));
    }

    #[test]
    fn test_update_traits_rounds() {
        let mut persona = Persona::default();
        persona.update_traits(&updates(json!({ "wisdom": 42.6, "playfulness": 10.2 })));
        assert_eq!(persona.trait_score("wisdom"), Some(43));
        assert_eq!(persona.trait_score("playfulness"), Some(10));
    }

    #[test]
    fn test_update_traits_ignores_unknown_and_non_numeric() {
        let mut persona = Persona::default();
        let before = persona.trait_scores().clone();

        let changed = persona.update_traits(&updates(json!({
            "charisma": 50,
            "kindness": "very",
            "wisdom": null,
            "helpfulness": [1, 2]
        })));

        assert_eq!(changed, 0);
        assert_eq!(persona.trait_scores(), &before);
        assert_eq!(persona.trait_score("charisma"), None);
    }

    #[test]
    fn test_update_traits_counts_changes() {
        let mut persona = Persona::default();
        let changed = persona.update_traits(&updates(json!({ "kindness": 95, "wisdom": 10 })));
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_default_level_uses_unknown_stage_defaults() {
        let persona = Persona::default();
        assert_eq!(persona.stage_attributes(), StageAttributes::new(100, 50, 50));
    }

    #[test]
    fn test_description_lists_high_traits() {
        let persona = Persona::default();
        let description = persona.description();
        assert!(description.starts_with("Tôi là Linh Nhi"));
        assert!(description.contains("rất tốt bụng"));
        assert!(description.contains("rất hữu ích"));
        assert!(!description.contains("vui tươi"));
        assert!(description.ends_with("cảm thấy happy."));
    }

    #[test]
    fn test_description_without_standout_traits() {
        let persona = Persona::default()
            .with_traits(BTreeMap::from([("kindness".to_string(), 10)]))
            .unwrap();
        assert!(persona.description().contains("bình thường"));
    }

    #[test]
    fn test_pick_random_ability_comes_from_list() {
        let persona = Persona::default();
        let mut rng = StepRng::new(0, 0);
        let ability = persona.pick_random_ability(&mut rng);
        assert_eq!(ability, "Đọc tâm ý người khác");
        assert!(persona.can_use_ability(ability));
        assert!(!persona.can_use_ability("Bay lên trời"));
    }
}
