//! Persona Routes - Personality, status and lore

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::models::{
    LoreResponse, PersonaResponse, StatusResponse, UpdatePersonalityRequest,
    UpdatePersonalityResponse,
};
use crate::AppState;

/// Get the current personality
#[utoipa::path(
    get,
    path = "/api/ai/personality",
    responses(
        (status = 200, description = "Current persona", body = PersonaResponse)
    ),
    tag = "Persona"
)]
pub async fn get_personality(State(state): State<AppState>) -> Json<PersonaResponse> {
    Json(state.companion.persona_snapshot().into())
}

/// Update trait scores
///
/// Numbers are rounded and clamped to 0..=100. Unknown traits and
/// non-numeric values are ignored.
#[utoipa::path(
    post,
    path = "/api/ai/personality",
    request_body = UpdatePersonalityRequest,
    responses(
        (status = 200, description = "Personality updated", body = UpdatePersonalityResponse),
        (status = 422, description = "Body is not a personality object")
    ),
    tag = "Persona"
)]
pub async fn update_personality(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePersonalityRequest>,
) -> Json<UpdatePersonalityResponse> {
    let persona = state.companion.update_persona_traits(&payload.personality);

    Json(UpdatePersonalityResponse {
        success: true,
        personality: persona.into(),
        timestamp: state.companion.now(),
    })
}

/// Persona, memory usage and self description
#[utoipa::path(
    get,
    path = "/api/ai/status",
    responses(
        (status = 200, description = "Companion status", body = StatusResponse)
    ),
    tag = "Persona"
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.companion.status().into())
}

/// One random pick from each lore list
#[utoipa::path(
    get,
    path = "/api/ai/lore",
    responses(
        (status = 200, description = "Lore sample", body = LoreResponse)
    ),
    tag = "Persona"
)]
pub async fn get_lore(State(state): State<AppState>) -> Json<LoreResponse> {
    Json(state.companion.lore_sample().into())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/ai/personality",
            get(get_personality).post(update_personality),
        )
        .route("/api/ai/status", get(get_status))
        .route("/api/ai/lore", get(get_lore))
}
