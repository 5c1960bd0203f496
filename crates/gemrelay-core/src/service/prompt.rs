//! Prompt service: validate, pick a model, dispatch, relay.

use gemrelay_types::error::RelayError;
use gemrelay_types::llm::LlmError;
use gemrelay_types::prompt::PromptRequest;

use crate::llm::box_provider::BoxCatalogSource;
use crate::llm::cache::SelectedModelCache;
use crate::llm::fallback::FallbackChain;
use crate::llm::selector::ModelSelector;

/// Output substituted when the upstream answered without any text.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text)";

/// Answer to a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutput {
    /// Text to return to the caller; never empty.
    pub output: String,
    pub model: String,
    pub generator: String,
    /// Set when a fallback generator answered instead of the primary.
    pub failover_warning: Option<String>,
}

/// Turns raw prompts into generated text.
///
/// Owns the memoized model selection, so one `PromptService` should live for
/// the whole process (shared behind an `Arc`).
pub struct PromptService {
    catalog: BoxCatalogSource,
    selector: ModelSelector,
    selected: SelectedModelCache,
    chain: FallbackChain,
}

impl PromptService {
    pub fn new(catalog: BoxCatalogSource, selector: ModelSelector, chain: FallbackChain) -> Self {
        Self {
            catalog,
            selector,
            selected: SelectedModelCache::new(),
            chain,
        }
    }

    /// The selected model, resolving it on first use.
    pub async fn selected_model(&self) -> Option<&str> {
        self.selected
            .get_or_resolve(|| self.selector.resolve(&self.catalog))
            .await
    }

    /// Generate an answer for `raw_prompt`.
    ///
    /// An empty prompt is rejected before any upstream call.
    pub async fn answer(&self, raw_prompt: Option<&str>) -> Result<PromptOutput, RelayError> {
        let prompt = PromptRequest::from_optional(raw_prompt)?;

        let model = self
            .selected_model()
            .await
            .ok_or(RelayError::NoModelAvailable)?;

        let result = self.chain.generate(model, prompt.as_str()).await?;
        let generation = result.generation;

        tracing::debug!(
            %model,
            generator = %generation.generator,
            chars = generation.text.len(),
            "Prompt answered"
        );

        let output = if generation.text.is_empty() {
            NO_TEXT_PLACEHOLDER.to_string()
        } else {
            generation.text
        };

        Ok(PromptOutput {
            output,
            model: model.to_string(),
            generator: generation.generator,
            failover_warning: result.failover_warning,
        })
    }

    /// Fetch the raw upstream catalog (uncached).
    pub async fn catalog_raw(&self) -> Result<serde_json::Value, LlmError> {
        self.catalog.fetch_raw().await
    }
}
