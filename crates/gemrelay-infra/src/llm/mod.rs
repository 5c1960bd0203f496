//! Upstream provider implementations.
//!
//! Contains the concrete implementations of the `gemrelay-core` provider
//! traits, plus a factory ([`build_prompt_service`]) that wires them into a
//! [`PromptService`] from a [`RelayConfig`].

pub mod gemini;
pub mod openai_compat;

use secrecy::SecretString;

use gemrelay_core::llm::box_provider::{BoxCatalogSource, BoxTextGenerator};
use gemrelay_core::llm::fallback::FallbackChain;
use gemrelay_core::llm::selector::ModelSelector;
use gemrelay_core::service::prompt::PromptService;
use gemrelay_types::config::RelayConfig;

use self::gemini::GeminiRestClient;
use self::openai_compat::OpenAiCompatGenerator;

/// Build the REST client used for both catalog lookup and fallback generation.
pub fn create_rest_client(config: &RelayConfig, api_key: &SecretString) -> GeminiRestClient {
    GeminiRestClient::new(
        reqwest::Client::new(),
        api_key.clone(),
        config.base_url.clone(),
        config.api_version.clone(),
    )
}

/// Wire the prompt service: REST catalog, preference selector, and an
/// SDK-then-REST fallback chain.
pub fn build_prompt_service(config: &RelayConfig, api_key: &SecretString) -> PromptService {
    let chain = FallbackChain::new(vec![
        BoxTextGenerator::new(OpenAiCompatGenerator::new(api_key, &config.openai_base_url)),
        BoxTextGenerator::new(create_rest_client(config, api_key)),
    ]);

    tracing::debug!(
        generators = ?chain.generator_names(),
        api_version = %config.api_version,
        "Prompt service wired"
    );

    PromptService::new(
        BoxCatalogSource::new(create_rest_client(config, api_key)),
        ModelSelector::new(config.preferred_models.clone()),
        chain,
    )
}
