//! # decoupage-api — HTTP Surface for the Benin Territorial Breakdown
//!
//! Read-only lookup API over the four-level administrative tree held in
//! memory by `decoupage-core`.
//!
//! ## API Surface
//!
//! | Path                                                  | Module                  |
//! |-------------------------------------------------------|-------------------------|
//! | `GET /departements/{id_dep}`                          | [`routes::territoire`]  |
//! | `GET /departements/{id_dep}/communes`                 | [`routes::territoire`]  |
//! | `GET .../communes/{id_com}/arrondissements`           | [`routes::territoire`]  |
//! | `GET .../arrondissements/{id_arrond}/quartiers`       | [`routes::territoire`]  |
//! | `GET /openapi.json`                                   | [`openapi`]             |
//! | `GET /health/liveness`, `GET /health/readiness`       | this module             |
//!
//! Cross-origin access is restricted to a single allowed origin
//! (configurable; see [`state::AppConfig`]).

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::{AppState, DEFAULT_ALLOWED_ORIGIN};

/// Assemble the full application router.
///
/// Lookup routes and the OpenAPI document share the CORS restriction;
/// health probes are mounted alongside them (they carry no data, so the
/// shared layer is harmless).
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origin);

    Router::new()
        .merge(routes::territoire::router())
        .merge(openapi::router())
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer allowing exactly one origin, GET/OPTIONS only.
///
/// An unparseable configured origin falls back to the default rather
/// than failing open or aborting startup.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                origin = %allowed_origin,
                "invalid allowed origin, falling back to default"
            );
            HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)
        });
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
}

/// Liveness probe — always returns 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the service is ready once the tree is loaded and
/// non-empty. With the bundled dataset this is true from startup; a 503
/// here means an override dataset loaded empty.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.decoupage.departements().is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "dataset empty").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
