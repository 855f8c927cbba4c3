use crate::domain::errors::LoginError;
use crate::interface_adapters::errors::{BodyReadError, HandlerError, HttpError};
use crate::interface_adapters::protocol::LoginRequest;
use crate::interface_adapters::state::AppState;
use crate::use_cases::login::LoginUseCase;
use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
};
use uuid::Uuid;

pub const LOGIN_PATH: &str = "/login/";

// Handler for the login endpoint. Success writes a bare 200; every failure
// is returned to the dispatcher.
#[tracing::instrument(
    name = "login",
    skip_all,
    fields(request_id = %Uuid::new_v4(), method = %request.method())
)]
pub async fn login(
    State(state): State<AppState>,
    request: Request,
) -> Result<StatusCode, HandlerError> {
    if request.method() != Method::POST {
        return Err(HttpError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into());
    }

    let body = to_bytes(request.into_body(), state.max_body_bytes)
        .await
        .map_err(|err| HandlerError::internal(BodyReadError::from(err)))?;

    let payload = LoginRequest::from_json(&body).map_err(|err| {
        HttpError::new(StatusCode::BAD_REQUEST, "Bad request: Invalid JSON").with_cause(err)
    })?;

    let use_case = LoginUseCase {
        checker: state.credentials.clone(),
    };

    match use_case.execute(payload).await {
        Ok(()) => {
            tracing::info!("login succeeded");
            Ok(StatusCode::OK)
        }
        Err(LoginError::WrongPassword) => {
            Err(HttpError::new(StatusCode::UNAUTHORIZED, "Wrong Password").into())
        }
        Err(err @ LoginError::Backend(_)) => Err(HandlerError::internal(err)),
    }
}

// Sends the bare mount path on to `/login/`, keeping any query string.
pub async fn login_redirect(uri: Uri) -> impl IntoResponse {
    let location = match uri.query() {
        Some(query) => format!("{LOGIN_PATH}?{query}"),
        None => LOGIN_PATH.to_string(),
    };

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}
