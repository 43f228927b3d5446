use axum::{
    body::{Body, to_bytes},
    extract::Request,
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;
use serde_json::Value;
use tracing::info;

use crate::presentation::http::app_error::AppError;

const REDACTED_FIELDS: [&str; 1] = ["password"];

/// Logs method, path and body, then hands the request on unchanged.
pub(crate) async fn request_logger(request: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.map_err(body_read_error)?;

    info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %loggable_body(&bytes),
        "request"
    );

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

fn body_read_error(err: axum::Error) -> AppError {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&err);
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return AppError::PayloadTooLarge;
        }
        source = current.source();
    }
    AppError::BadRequest(format!("failed to read request body: {err}"))
}

fn loggable_body(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "{}".to_string();
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(mut value) => {
            if let Value::Object(map) = &mut value {
                for field in REDACTED_FIELDS {
                    if let Some(secret) = map.get_mut(field) {
                        *secret = Value::String("***".to_string());
                    }
                }
            }
            value.to_string()
        }
        Err(_) => format!("<{} bytes>", bytes.len()),
    }
}
