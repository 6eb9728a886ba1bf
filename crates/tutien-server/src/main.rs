use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::SystemClock;
use application::CompanionService;
use config::CompanionConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub companion: Arc<CompanionService>,
}

#[derive(Serialize, ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Tu Tien API is running - linh khí flows through the sect".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble every route, the Swagger UI and the shared layers
pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::chat::router())
        .merge(routes::persona::router())
        .merge(routes::memory::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🧘 Tu Tien API initializing...");

    let config =
        CompanionConfig::from_secrets(&secrets).context("invalid companion configuration")?;

    if config.rng_seed.is_some() {
        tracing::info!("🎲 Replies seeded - responses are reproducible");
    }

    let companion = CompanionService::from_config(&config, Arc::new(SystemClock))
        .context("failed to build the companion")?;

    tracing::info!(
        "🌸 {} awakens at {} (remembers {} exchanges)",
        config.persona_name,
        config.cultivation_level,
        config.memory_capacity
    );

    let state = AppState {
        companion: Arc::new(companion),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Tu Tien API ready");

    Ok(router.into())
}

#[cfg(test)]
mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, Response};
    use axum::Router;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;
    use tutien::FixedClock;

    use crate::application::CompanionService;
    use crate::config::CompanionConfig;
    use crate::{build_router, AppState};

    pub fn test_router() -> Router {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
        let config = CompanionConfig::default().with_rng_seed(7);
        let companion = CompanionService::from_config(&config, Arc::new(clock)).unwrap();
        build_router(AppState {
            companion: Arc::new(companion),
        })
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    pub async fn json_body(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
