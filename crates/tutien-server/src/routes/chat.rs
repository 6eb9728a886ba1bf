//! Chat Routes - One turn of conversation
//!
//! A missing, blank or non-string message is answered with the apology
//! reply and a 400 status; nothing is remembered for it.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// Send a message to the companion
#[utoipa::path(
    post,
    path = "/api/ai/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Companion reply", body = ChatResponse),
        (status = 400, description = "Message missing, blank or not a string", body = ChatResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ChatResponse>)> {
    let message = payload
        .message
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty());

    let Some(message) = message else {
        let persona = state.companion.persona_snapshot();
        tracing::warn!("⚠️  Chat request without a message");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ChatResponse::apology(
                persona.name(),
                persona.cultivation_level(),
                state.companion.now(),
            )),
        ));
    };

    let context = payload.context.as_ref().and_then(|c| c.as_object());
    let reply = state.companion.process_message(message, context);

    Ok(Json(reply.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/ai/chat", post(chat))
}
