//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Chat models
    ChatRequest,
    ChatResponse,
    // Memory models
    ClearMemoriesResponse,
    ExchangeResponse,
    // Persona models
    LoreResponse,
    PersonaResponse,
    StageResponse,
    StatusResponse,
    UpdatePersonalityRequest,
    UpdatePersonalityResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Chat endpoints
        super::chat::chat,
        // Persona endpoints
        super::persona::get_personality,
        super::persona::update_personality,
        super::persona::get_status,
        super::persona::get_lore,
        // Memory endpoints
        super::memory::list_memories,
        super::memory::clear_memories,
    ),
    info(
        title = "Tu Tien API",
        version = "0.2.0",
        description = "修仙 (Tu Tiên) - A cultivation-world companion who answers in character.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Chat", description = "Chat - Templated replies flavoured by mood"),
        (name = "Persona", description = "Persona - Traits, status and lore"),
        (name = "Memory", description = "Memory - Bounded log of recent exchanges"),
    ),
    components(
        schemas(
            // Health
            crate::HealthCheck,
            // Chat
            ChatRequest,
            ChatResponse,
            // Persona
            StageResponse,
            PersonaResponse,
            UpdatePersonalityRequest,
            UpdatePersonalityResponse,
            StatusResponse,
            LoreResponse,
            // Memory
            ExchangeResponse,
            ClearMemoriesResponse,
        )
    ),
)]
pub struct ApiDoc;
