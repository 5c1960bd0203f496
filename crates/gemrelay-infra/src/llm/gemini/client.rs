//! GeminiRestClient -- raw HTTP access to the Gemini REST API.
//!
//! Serves both as the model [`CatalogSource`] (`GET {base}/{version}/models`)
//! and as the fallback [`TextGenerator`]
//! (`POST {base}/{version}/models/{model}:generateContent`).
//!
//! The API key travels in the `x-goog-api-key` header, never in the URL, so
//! transport errors (which embed the URL) cannot leak it.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use gemrelay_core::llm::provider::{CatalogSource, TextGenerator};
use gemrelay_types::llm::LlmError;

use super::types::{GenerateContentRequest, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST client.
///
/// Does NOT derive Debug; the API key is only exposed while building
/// request headers.
pub struct GeminiRestClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    api_version: String,
}

impl GeminiRestClient {
    /// Create a client for `{base_url}/{api_version}`.
    pub fn new(
        client: reqwest::Client,
        api_key: SecretString,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.into(),
            api_version: api_version.into(),
        }
    }

    /// Build the full API URL for a path below the version segment.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            path
        )
    }
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

impl CatalogSource for GeminiRestClient {
    async fn fetch_raw(&self) -> Result<serde_json::Value, LlmError> {
        let response = self
            .client
            .get(self.url("models"))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| LlmError::UpstreamUnavailable(format!("ListModels failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::UpstreamUnavailable(format!(
                "ListModels failed: {} {}",
                status.as_u16(),
                status_text(status)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse model list: {e}")))
    }
}

impl TextGenerator for GeminiRestClient {
    fn name(&self) -> &str {
        "rest"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let url = self.url(&format!("models/{model}:generateContent"));

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::UpstreamStatus {
                status: status.as_u16(),
                status_text: status_text(status),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        Ok(parsed.text())
    }
}
