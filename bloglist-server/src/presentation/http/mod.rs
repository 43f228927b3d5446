use axum::{Router, middleware::from_fn, routing::get};

use self::handlers::{health_handler, unknown_endpoint};
use self::middleware::{auth::token_extractor, request_logger::request_logger};
use super::AppState;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod routes;


/// The application router with the per-request middleware chain:
/// request logger, then token extraction, then dispatch. Unmatched
/// paths end in the `unknown endpoint` fallback.
pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(routes::router(state.clone()))
        .fallback(unknown_endpoint)
        .layer(from_fn(token_extractor))
        .layer(from_fn(request_logger))
        .with_state(state)
}
