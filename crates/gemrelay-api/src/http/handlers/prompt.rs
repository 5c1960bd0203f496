//! Relay endpoint.
//!
//! POST /api/gemini - `{ "prompt": string }` in, `{ "output": string }` out.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use tracing::Instrument;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub output: String,
}

/// Pull the `prompt` string out of a JSON request body.
///
/// A body that was not sent as JSON, or has no string `prompt`, yields
/// `None`, which the service rejects as an empty prompt.
fn prompt_field(body: Result<Json<serde_json::Value>, JsonRejection>) -> Option<String> {
    let Json(value) = body.ok()?;
    value.get("prompt")?.as_str().map(str::to_owned)
}

/// POST /api/gemini - Answer a prompt with the selected upstream model.
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<PromptResponse>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("prompt", %request_id);

    async move {
        let prompt = prompt_field(body);

        match state.prompt_service.answer(prompt.as_deref()).await {
            Ok(answer) => {
                tracing::info!(
                    model = %answer.model,
                    generator = %answer.generator,
                    failover = answer.failover_warning.as_deref(),
                    "Prompt relayed"
                );
                Ok(Json(PromptResponse {
                    output: answer.output,
                }))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Prompt failed");
                Err(AppError::from_relay(err, &state.config))
            }
        }
    }
    .instrument(span)
    .await
}
