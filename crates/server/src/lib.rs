pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use error::ApiErr;

/// Build the application router.
///
/// This is a one-time configuration step; the returned router is immutable
/// and carries no shared state, so every request is handled independently.
pub fn app() -> Router {
    Router::new()
        .route("/", get(routes::index::welcome))
        .route("/health", get(routes::health::health))
        .route(
            "/euclidean_distance/",
            get(routes::distance::euclidean_distance),
        )
        .route("/add/", get(routes::add::add))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Fallback for paths with no registered route.
async fn not_found() -> ApiErr {
    ApiErr::not_found("not found")
}
