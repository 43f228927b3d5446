use axum::{Router, routing::post};

use crate::presentation::AppState;
use crate::presentation::http::handlers::login::login;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(login))
}
