//! HTTP API route definitions.

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::metrics;

use super::handlers::{
    ask_openai, bmi, calories, health, hydration, root, sleep_score, weather, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Computation endpoints
        .route("/bmi", get(bmi))
        .route("/calories", get(calories))
        .route("/hydration", get(hydration))
        .route("/sleep-score", get(sleep_score))
        // Upstream proxy endpoints
        .route("/weather", get(weather))
        .route("/ask-openai", get(ask_openai))
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Count every request by path and response status.
async fn track_requests(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    metrics::inc_http_request(&path, response.status().as_u16());
    response
}
