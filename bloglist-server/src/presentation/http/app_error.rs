use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("token missing")]
    TokenMissing,

    #[error("unknown endpoint")]
    UnknownEndpoint,

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("request timed out")]
    Timeout,

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Domain(err) => {
                let status = match err {
                    DomainError::Validation { .. }
                    | DomainError::MalformedId(_)
                    | DomainError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
                    DomainError::InvalidCredentials
                    | DomainError::TokenInvalid
                    | DomainError::TokenExpired => StatusCode::UNAUTHORIZED,
                    DomainError::Forbidden => StatusCode::FORBIDDEN,
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                    DomainError::Unexpected(_) => {
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "internal error".to_string(),
                        );
                    }
                };
                (status, err.to_string())
            }
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, validation_message(err)),
            AppError::Json(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::TokenMissing => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::UnknownEndpoint => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::Timeout => (StatusCode::REQUEST_TIMEOUT, self.to_string()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();

        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %msg, "request rejected");
        }

        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
