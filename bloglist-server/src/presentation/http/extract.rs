use axum::extract::FromRequest;

use super::app_error::AppError;

/// `axum::Json` whose rejection goes through [`AppError`], so malformed
/// bodies get the same `{ "error": ... }` shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub(crate) struct AppJson<T>(pub(crate) T);
