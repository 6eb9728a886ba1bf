//! Persona DTOs - Personality, status and lore

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{CompanionStatus, LoreSample};
use tutien::{Persona, StageAttributes};

/// Lore scores of the current cultivation stage
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StageResponse {
    pub power: u64,
    pub wisdom: u8,
    pub mystery: u8,
}

impl From<StageAttributes> for StageResponse {
    fn from(stage: StageAttributes) -> Self {
        Self {
            power: stage.power,
            wisdom: stage.wisdom,
            mystery: stage.mystery,
        }
    }
}

/// Persona response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonaResponse {
    pub name: String,
    pub cultivation_level: String,
    pub current_mood: String,
    pub personality: BTreeMap<String, u8>,
    pub special_abilities: Vec<String>,
    pub stage: StageResponse,
}

impl From<Persona> for PersonaResponse {
    fn from(persona: Persona) -> Self {
        Self {
            stage: persona.stage_attributes().into(),
            name: persona.name().to_string(),
            cultivation_level: persona.cultivation_level().to_string(),
            current_mood: persona.current_mood().to_string(),
            personality: persona.trait_scores().clone(),
            special_abilities: persona.abilities().to_vec(),
        }
    }
}

/// Update personality request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePersonalityRequest {
    /// Trait name to new score; unknown traits and non-numbers are ignored
    pub personality: HashMap<String, serde_json::Value>,
}

/// Update personality response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePersonalityResponse {
    pub success: bool,
    pub personality: PersonaResponse,
    pub timestamp: DateTime<Utc>,
}

/// Status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub persona: PersonaResponse,
    pub memories_count: usize,
    pub memory_capacity: usize,
    pub description: String,
}

impl From<CompanionStatus> for StatusResponse {
    fn from(status: CompanionStatus) -> Self {
        Self {
            persona: status.persona.into(),
            memories_count: status.memories_count,
            memory_capacity: status.memory_capacity,
            description: status.description,
        }
    }
}

/// Lore response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoreResponse {
    pub greeting: String,
    pub farewell: String,
    pub cultivation_advice: String,
    pub emotional_support: String,
    pub special_ability: String,
}

impl From<LoreSample> for LoreResponse {
    fn from(lore: LoreSample) -> Self {
        Self {
            greeting: lore.greeting,
            farewell: lore.farewell,
            cultivation_advice: lore.cultivation_advice,
            emotional_support: lore.emotional_support,
            special_ability: lore.special_ability,
        }
    }
}
