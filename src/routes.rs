// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{compare, exam, flashcards, results},
    state::AppState,
};

/// `*` anywhere in the list allows every origin.
fn allowed_origins(configured: &[String]) -> AllowOrigin {
    if configured.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}

/// Assembles the main application router.
///
/// * Merges all sub-routers (compare, exams, flashcards, results).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (mapping catalog, remote store, config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config.allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let exam_routes = Router::new().route("/{exam_id}", get(exam::get_exam));

    Router::new()
        .route("/api/compare", post(compare::compare_services))
        .route("/api/compare/services", get(compare::list_services))
        .nest("/api/test", exam_routes)
        .route("/api/flashcards", get(flashcards::list_flashcards))
        .route("/api/results", post(results::grade_attempt))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
