//! The single error type handlers return, and the one place it becomes a
//! response.
//!
//! Every failure is rendered as `{"status": "error", "description": ...}`
//! with the HTTP status carried by the error.

use super::validation::FieldError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Fields(Vec<FieldError>),
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Fields(fields) => {
                let rendered = fields
                    .iter()
                    .map(|field| format!("{}: {}", field.loc.join("."), field.msg))
                    .collect::<Vec<_>>()
                    .join("; ");
                f.write_str(&rendered)
            }
        }
    }
}

impl From<&str> for ErrorMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<FieldError>> for ErrorMessage {
    fn from(fields: Vec<FieldError>) -> Self {
        Self::Fields(fields)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{status_code}: {message}")]
pub struct HttpError {
    pub status_code: StatusCode,
    pub message: ErrorMessage,
}

impl HttpError {
    pub fn new(status_code: StatusCode, message: impl Into<ErrorMessage>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn bad_request(fields: Vec<FieldError>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, fields)
    }

    pub fn not_found(message: impl Into<ErrorMessage>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(json!({
                "status": "error",
                "description": self.message,
            })),
        )
            .into_response()
    }
}

impl From<sqlx::Error> for HttpError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Unhandled storage error: {}", err);
        Self::internal()
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::bad_request(vec![FieldError::new(
            vec!["body".to_string()],
            "type_error.json",
            rejection.body_text(),
        )])
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());
        Self::not_found("ad not found")
    }
}
