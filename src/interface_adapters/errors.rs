// Errors returned by HTTP handlers.
//
// A handler error is either client-facing, in which case it knows its own
// status, headers and body, or internal, in which case the client only ever
// sees a bare 500.

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync>;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// Failure while serializing a client error into its response body.
#[derive(Debug, Error)]
#[error("error parsing response body: {0}")]
pub struct BodyError(#[from] serde_json::Error);

// Failure while buffering the request body.
#[derive(Debug, Error)]
#[error("request body read error: {0}")]
pub struct BodyReadError(#[from] axum::Error);

// An error whose details can be shared with the client.
pub trait ClientError: StdError + Send + Sync + 'static {
    // Serialized response body.
    fn response_body(&self) -> Result<Vec<u8>, BodyError>;

    // Status code and headers to send with the body.
    fn response_headers(&self) -> (StatusCode, HeaderMap);
}

// Client-facing error with a JSON `{"detail": ...}` body.
//
// The cause is kept for server-side logs only and the status goes on the
// status line, so neither is serialized.
#[derive(Debug, Serialize)]
pub struct HttpError {
    #[serde(skip)]
    cause: Option<BoxError>,
    detail: String,
    #[serde(skip)]
    status: StatusCode,
}

impl HttpError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            cause: None,
            detail: detail.into(),
            status,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} : {cause}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl ClientError for HttpError {
    fn response_body(&self) -> Result<Vec<u8>, BodyError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn response_headers(&self) -> (StatusCode, HeaderMap) {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        (self.status, headers)
    }
}

// Error type returned by fallible handlers.
#[derive(Debug)]
pub enum HandlerError {
    Client(Box<dyn ClientError>),
    Internal(BoxError),
}

impl HandlerError {
    pub fn internal(err: impl Into<BoxError>) -> Self {
        Self::Internal(err.into())
    }

    // Returns the client-facing view of this error, if it has one.
    pub fn as_client(&self) -> Option<&dyn ClientError> {
        match self {
            Self::Client(err) => Some(&**err),
            Self::Internal(_) => None,
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(err) => fmt::Display::fmt(err, f),
            Self::Internal(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<HttpError> for HandlerError {
    fn from(err: HttpError) -> Self {
        Self::Client(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn when_error_has_no_cause_then_message_is_detail() {
        let err = HttpError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");

        assert_eq!(err.to_string(), "Method not allowed");
        assert!(err.source().is_none());
    }

    #[test]
    fn when_error_has_cause_then_message_appends_cause() {
        let cause = parse_error();
        let expected = format!("Bad request: Invalid JSON : {cause}");
        let err = HttpError::new(StatusCode::BAD_REQUEST, "Bad request: Invalid JSON")
            .with_cause(cause);

        assert_eq!(err.to_string(), expected);
        assert!(err.source().is_some());
    }

    #[test]
    fn when_body_is_serialized_then_only_detail_is_included() {
        let err = HttpError::new(StatusCode::BAD_REQUEST, "Bad request: Invalid JSON")
            .with_cause(parse_error());

        let body = err.response_body().expect("expected body to serialize");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("expected json body");

        assert_eq!(value, serde_json::json!({ "detail": "Bad request: Invalid JSON" }));
        assert_eq!(value["detail"], err.detail());
    }

    #[test]
    fn when_headers_are_requested_then_status_and_json_content_type_are_returned() {
        let err = HttpError::new(StatusCode::UNAUTHORIZED, "Wrong Password");

        let (status, headers) = err.response_headers();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(header::CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some(JSON_CONTENT_TYPE.as_bytes())
        );
    }

    #[test]
    fn when_http_error_converts_to_handler_error_then_it_is_client_facing() {
        let err: HandlerError = HttpError::new(StatusCode::UNAUTHORIZED, "Wrong Password").into();

        let client = err.as_client().expect("expected client error");

        assert_eq!(client.response_headers().0, StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Wrong Password");
    }

    #[test]
    fn when_error_is_internal_then_it_has_no_client_view() {
        let err = HandlerError::internal("login user backend error: no such user");

        assert!(err.as_client().is_none());
        assert_eq!(err.to_string(), "login user backend error: no such user");
    }

    #[test]
    fn when_body_serialization_fails_then_error_message_is_prefixed() {
        let err = BodyError::from(parse_error());

        assert!(err.to_string().starts_with("error parsing response body: "));
    }
}
