pub(crate) mod blogs;
pub(crate) mod login;
pub(crate) mod users;

use axum::Json;
use serde::Serialize;

use super::app_error::AppError;

#[derive(Debug, Serialize)]
pub(crate) struct HealthzResponse {
    status: &'static str,
}

pub(crate) async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

pub(crate) async fn unknown_endpoint() -> AppError {
    AppError::UnknownEndpoint
}
