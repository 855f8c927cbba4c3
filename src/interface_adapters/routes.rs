use crate::interface_adapters::handlers::{login, login_redirect, LOGIN_PATH};
use crate::interface_adapters::state::AppState;
use axum::{routing::any, Router};

pub fn app(state: AppState) -> Router {
    // The handler checks the method itself so a wrong method still gets the
    // JSON error body. The wildcard route keeps everything below /login/
    // on the same handler.
    Router::new()
        .route(LOGIN_PATH, any(login))
        .route("/login/{*rest}", any(login))
        .route("/login", any(login_redirect))
        .with_state(state)
}
