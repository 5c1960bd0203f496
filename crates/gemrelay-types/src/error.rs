use thiserror::Error;

use crate::llm::LlmError;

/// Errors a prompt request can end in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Empty prompt")]
    EmptyPrompt,

    #[error("No text model available on this key/project.")]
    NoModelAvailable,

    /// Non-success response from the upstream on the final attempt.
    #[error("Gemini request failed: {status} {status_text}")]
    Upstream {
        status: u16,
        status_text: String,
        message: String,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl From<LlmError> for RelayError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::UpstreamStatus {
                status,
                status_text,
                body,
            } => RelayError::Upstream {
                status,
                status_text,
                message: body,
            },
            other => RelayError::Unexpected(other.to_string()),
        }
    }
}
