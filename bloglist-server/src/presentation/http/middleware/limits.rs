use std::time::Duration;

use anyhow::anyhow;
use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{StatusCode, header},
    middleware::map_response,
    response::{IntoResponse, Response},
};
use tower::ServiceBuilder;
use tower::timeout::error::Elapsed;
use tower_http::limit::RequestBodyLimitLayer;

use crate::infrastructure::settings::Settings;
use crate::presentation::http::app_error::AppError;

/// Body size cap, concurrency cap and per-request timeout.
pub(crate) fn apply_limits(router: Router, settings: &Settings) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(settings.http_request_body_limit_bytes))
        .layer(map_response(payload_too_large_as_json))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .concurrency_limit(settings.http_concurrency_limit)
                .timeout(Duration::from_secs(settings.http_request_timeout_secs)),
        )
}

async fn handle_layer_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(anyhow!("unhandled middleware error: {err}"))
    }
}

// The body limit answers an oversized Content-Length with a plain-text 413.
async fn payload_too_large_as_json(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    if response.status() == StatusCode::PAYLOAD_TOO_LARGE && !is_json {
        return AppError::PayloadTooLarge.into_response();
    }
    response
}
