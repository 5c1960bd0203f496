//! Application error type mapping to HTTP status codes and JSON bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gemrelay_types::config::RelayConfig;
use gemrelay_types::error::RelayError;
use gemrelay_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or blank prompt.
    EmptyPrompt,
    /// No upstream model could be selected.
    NoModelAvailable { hint: String },
    /// Non-success upstream response, relayed with its status.
    Upstream {
        status: u16,
        status_text: String,
        message: String,
    },
    /// Anything else.
    Internal(String),
}

impl AppError {
    /// Convert a relay error, filling in the catalog hint from `config`.
    pub fn from_relay(err: RelayError, config: &RelayConfig) -> Self {
        match err {
            RelayError::EmptyPrompt => AppError::EmptyPrompt,
            RelayError::NoModelAvailable => AppError::NoModelAvailable {
                hint: config.models_hint(),
            },
            RelayError::Upstream {
                status,
                status_text,
                message,
            } => AppError::Upstream {
                status,
                status_text,
                message,
            },
            RelayError::Unexpected(msg) => AppError::Internal(msg),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::EmptyPrompt => (
                StatusCode::BAD_REQUEST,
                json!({ "error": RelayError::EmptyPrompt.to_string() }),
            ),
            AppError::NoModelAvailable { hint } => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": RelayError::NoModelAvailable.to_string(),
                    "hint": hint,
                }),
            ),
            AppError::Upstream {
                status,
                status_text,
                message,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                json!({
                    "error": "Gemini request failed",
                    "status": status,
                    "statusText": status_text,
                    "message": message,
                }),
            ),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}
