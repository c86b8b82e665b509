//! Error types and response handling for the locator endpoint.
//!
//! Every failure is converted at the endpoint boundary into
//! `{ "error": "<message>" }` plus an HTTP status.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Generic message for failures whose details stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Message for a missing or falsy coordinate.
pub const COORDINATES_REQUIRED: &str = "Latitude and Longitude are required.";

/// Errors that can occur while serving a location search.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The provider credential is not configured. Fatal to the request.
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// The caller sent a missing or invalid coordinate.
    #[error("{0}")]
    Validation(String),

    /// The provider answered with a non-success status.
    #[error("Places API error: {status} - {body}")]
    Upstream { status: StatusCode, body: String },

    /// Transport or decoding failure. Never shown to the caller.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for LocatorError {
    fn from(err: reqwest::Error) -> Self {
        LocatorError::Unexpected(err.to_string())
    }
}

impl LocatorError {
    pub fn missing_credential() -> Self {
        LocatorError::Configuration("Places API key missing".to_string())
    }

    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            LocatorError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LocatorError::Validation(_) => StatusCode::BAD_REQUEST,
            LocatorError::Upstream { status, .. } => *status,
            LocatorError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable classification, used in logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            LocatorError::Configuration(_) => "config_error",
            LocatorError::Validation(_) => "validation_error",
            LocatorError::Upstream { .. } => "upstream_error",
            LocatorError::Unexpected(_) => "internal_error",
        }
    }

    /// The message sent to the caller.
    ///
    /// Upstream bodies are forwarded verbatim; unexpected failures are masked.
    pub fn public_message(&self) -> String {
        match self {
            LocatorError::Configuration(_) | LocatorError::Validation(_) => self.to_string(),
            LocatorError::Upstream { body, .. } => body.clone(),
            LocatorError::Unexpected(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for LocatorError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.public_message() });
        (
            self.status_code(),
            [(CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            LocatorError::missing_credential().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LocatorError::Validation(COORDINATES_REQUIRED.into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LocatorError::Upstream {
                status: StatusCode::FORBIDDEN,
                body: "denied".into()
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            LocatorError::Unexpected("boom".into()).error_type(),
            "internal_error"
        );
    }

    #[test]
    fn test_unexpected_is_masked() {
        let err = LocatorError::Unexpected("connection reset by peer at 10.0.0.3".into());
        assert_eq!(err.public_message(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_error_response_format() {
        let response = LocatorError::Validation(COORDINATES_REQUIRED.into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Latitude and Longitude are required." })
        );
    }

    #[tokio::test]
    async fn test_upstream_body_forwarded_verbatim() {
        let raw = r#"{"error":{"code":403,"message":"API key not valid"}}"#;
        let response = LocatorError::Upstream {
            status: StatusCode::FORBIDDEN,
            body: raw.to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"], raw);
    }

    #[tokio::test]
    async fn test_missing_credential_message() {
        let response = LocatorError::missing_credential().into_response();
        assert_eq!(
            body_json(response).await["error"],
            "Server configuration error: Places API key missing"
        );
    }
}
