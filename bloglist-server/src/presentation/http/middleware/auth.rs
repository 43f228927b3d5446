use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::domain::user::User;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppError;

const BEARER_PREFIX: &str = "bearer ";

/// Raw token taken from `Authorization: bearer <token>`.
#[derive(Debug, Clone)]
pub(crate) struct BearerToken(pub(crate) String);

#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) user: User,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::TokenMissing)
    }
}

/// Attaches the bearer token, if any. Never rejects.
pub(crate) async fn token_extractor(mut request: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        request.extensions_mut().insert(BearerToken(token));
    }
    next.run(request).await
}

/// Resolves the acting user for routes that need one.
pub(crate) async fn user_extractor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let BearerToken(token) = request
        .extensions()
        .get::<BearerToken>()
        .cloned()
        .ok_or(AppError::TokenMissing)?;

    let user = state.auth_service.authenticate(&token).await?;
    request
        .extensions_mut()
        .insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

// The scheme match is case-sensitive on purpose: only lowercase `bearer ` is accepted.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
