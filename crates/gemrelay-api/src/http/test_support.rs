//! Stub upstreams and state builders shared by the handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gemrelay_core::llm::box_provider::{BoxCatalogSource, BoxTextGenerator};
use gemrelay_core::llm::fallback::FallbackChain;
use gemrelay_core::llm::provider::{CatalogSource, TextGenerator};
use gemrelay_core::llm::selector::ModelSelector;
use gemrelay_core::service::prompt::PromptService;
use gemrelay_types::config::RelayConfig;
use gemrelay_types::llm::LlmError;

use crate::state::AppState;

/// Catalog that lists fixed model names, or fails, and counts lookups.
#[derive(Clone)]
pub struct StubCatalog {
    models: Option<Vec<&'static str>>,
    calls: Arc<AtomicUsize>,
}

impl StubCatalog {
    pub fn with(models: &[&'static str]) -> Self {
        Self {
            models: Some(models.to_vec()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            models: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for StubCatalog {
    async fn fetch_raw(&self) -> Result<serde_json::Value, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.models {
            Some(names) => Ok(serde_json::json!({
                "models": names
                    .iter()
                    .map(|n| serde_json::json!({
                        "name": format!("models/{n}"),
                        "supportedGenerationMethods": ["generateContent"],
                    }))
                    .collect::<Vec<_>>()
            })),
            None => Err(LlmError::UpstreamUnavailable(
                "ListModels failed: 403 Forbidden".to_string(),
            )),
        }
    }
}

/// Generator with a canned outcome.
struct Scripted {
    name: &'static str,
    outcome: Result<String, LlmError>,
}

impl TextGenerator for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    async fn generate(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
        self.outcome.clone()
    }
}

pub fn reply(name: &'static str, text: &str) -> BoxTextGenerator {
    BoxTextGenerator::new(Scripted {
        name,
        outcome: Ok(text.to_string()),
    })
}

pub fn failure(name: &'static str, err: LlmError) -> BoxTextGenerator {
    BoxTextGenerator::new(Scripted {
        name,
        outcome: Err(err),
    })
}

/// Default config with a static directory that never exists.
pub fn test_config() -> RelayConfig {
    RelayConfig {
        public_dir: "/nonexistent/gemrelay-public".to_string(),
        ..Default::default()
    }
}

pub fn state_with_config(
    config: RelayConfig,
    catalog: StubCatalog,
    generators: Vec<BoxTextGenerator>,
) -> AppState {
    let service = PromptService::new(
        BoxCatalogSource::new(catalog),
        ModelSelector::new(config.preferred_models.clone()),
        FallbackChain::new(generators),
    );
    AppState::new(service, config)
}

pub fn state_with(catalog: StubCatalog, generators: Vec<BoxTextGenerator>) -> AppState {
    state_with_config(test_config(), catalog, generators)
}
