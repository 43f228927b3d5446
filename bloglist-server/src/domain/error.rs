use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("malformatted id")]
    MalformedId(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("expected `{0}` to be unique")]
    AlreadyExists(&'static str),

    #[error("Permission denied")]
    Forbidden,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token invalid")]
    TokenInvalid,

    #[error("token expired")]
    TokenExpired,

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
