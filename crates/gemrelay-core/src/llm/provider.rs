//! Provider trait definitions.
//!
//! `TextGenerator` is the single capability every calling convention offers:
//! generate text from a prompt for a named model. `CatalogSource` lists the
//! models a credential can access. Both use native async fn in traits (RPITIT);
//! see `box_provider` for the object-safe wrappers.

use std::future::Future;

use gemrelay_types::llm::{LlmError, ModelCatalog};

/// A calling convention for the upstream generation API.
///
/// Implementations live in gemrelay-infra (e.g., `GeminiRestClient`).
pub trait TextGenerator: Send + Sync {
    /// Short name used in logs and results (e.g., "sdk", "rest").
    fn name(&self) -> &str;

    /// Generate text for `prompt` using `model`.
    ///
    /// `Ok("")` means the upstream answered but produced no text.
    fn generate(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Source of the upstream model catalog.
pub trait CatalogSource: Send + Sync {
    /// Fetch the catalog exactly as the upstream returned it.
    ///
    /// Fails with [`LlmError::UpstreamUnavailable`] on transport errors or a
    /// non-success status.
    fn fetch_raw(&self) -> impl Future<Output = Result<serde_json::Value, LlmError>> + Send;

    /// Fetch and parse the catalog.
    fn list_models(&self) -> impl Future<Output = Result<ModelCatalog, LlmError>> + Send {
        async {
            let raw = self.fetch_raw().await?;
            serde_json::from_value(raw)
                .map_err(|e| LlmError::Deserialization(format!("invalid model catalog: {e}")))
        }
    }
}
