//! Memory Routes - Remembered exchanges

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::models::{ClearMemoriesResponse, ExchangeResponse, MemoriesQuery};
use crate::AppState;

/// List remembered exchanges, oldest first
#[utoipa::path(
    get,
    path = "/api/ai/memories",
    params(MemoriesQuery),
    responses(
        (status = 200, description = "Remembered exchanges", body = Vec<ExchangeResponse>)
    ),
    tag = "Memory"
)]
pub async fn list_memories(
    State(state): State<AppState>,
    Query(query): Query<MemoriesQuery>,
) -> Json<Vec<ExchangeResponse>> {
    let exchanges = state.companion.list_memories(query.limit);
    Json(exchanges.into_iter().map(Into::into).collect())
}

/// Forget every exchange
#[utoipa::path(
    post,
    path = "/api/ai/memories/clear",
    responses(
        (status = 200, description = "Memories cleared", body = ClearMemoriesResponse)
    ),
    tag = "Memory"
)]
pub async fn clear_memories(State(state): State<AppState>) -> Json<ClearMemoriesResponse> {
    let cleared = state.companion.clear_memories();

    Json(ClearMemoriesResponse {
        success: true,
        message: format!("Đã xóa {cleared} ký ức"),
        cleared,
        timestamp: state.companion.now(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ai/memories", get(list_memories))
        .route("/api/ai/memories/clear", post(clear_memories))
}
