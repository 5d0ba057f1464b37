// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{health, inline, markup},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the markup and inline-editing routes.
/// * Applies global middleware (Trace, CORS, body limit).
/// * Injects global state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config.cors_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let markup_routes = Router::new()
        .route("/sanitize", post(markup::sanitize_fragment))
        .route("/richtext", post(markup::render_richtext));

    let inline_routes = Router::new().route("/attrs", post(inline::field_attrs));

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/api", markup_routes)
        .nest("/api/inline", inline_routes)
        .fallback(health::not_found)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}

/// `*` allows any origin; otherwise only the listed, well-formed origins.
fn allowed_origins(configured: &[String]) -> AllowOrigin {
    if configured.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
