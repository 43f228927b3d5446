use axum::Router;

use crate::presentation::AppState;

pub(crate) mod blogs;
pub(crate) mod login;
pub(crate) mod users;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/blogs", blogs::router(state))
        .nest("/api/users", users::router())
        .nest("/api/login", login::router())
}
