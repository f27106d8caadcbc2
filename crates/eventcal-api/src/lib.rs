// Eventcal API library
// Decision: Shared library so the binary and the router tests build the same app

pub mod api;
pub mod config;
pub mod openapi;
pub mod services;

use axum::{extract::State, routing::get, Json, Router};
use eventcal_storage::StorageBackend;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    storage: &'static str,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage,
    })
}

/// Build the full application router on top of `storage`
pub fn build_app(storage: StorageBackend) -> Router {
    let health_state = HealthState {
        storage: storage.kind(),
    };
    let events_state = api::events::AppState::new(storage);

    Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(api::events::routes(events_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Any origin, any method, any header
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
