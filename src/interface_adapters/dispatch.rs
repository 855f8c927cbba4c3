// Turns handler errors into HTTP responses.
//
// Handlers return `Result<T, HandlerError>`; axum runs the `Ok` side as the
// handler's own response and hands the `Err` side to `IntoResponse` below,
// which makes this module the single writer of error responses.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::interface_adapters::errors::HandlerError;

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}

// Builds the response for a failed request.
pub fn error_response(err: &HandlerError) -> Response {
    let Some(client_error) = err.as_client() else {
        tracing::error!(error = %err, "internal error");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let body = match client_error.response_body() {
        Ok(body) => body,
        Err(body_err) => {
            tracing::error!(error = %err, body_error = %body_err, "failed to build error body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let (status, headers) = client_error.response_headers();
    tracing::error!(error = %err, status = status.as_u16(), "client error");

    let mut response = Body::from(body).into_response();
    *response.status_mut() = status;
    response.headers_mut().extend(headers);
    response
}
