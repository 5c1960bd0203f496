//! Application state shared by the HTTP handlers and CLI commands.

use std::sync::Arc;

use secrecy::SecretString;

use gemrelay_core::service::prompt::PromptService;
use gemrelay_infra::llm::build_prompt_service;
use gemrelay_types::config::RelayConfig;

/// Shared application state.
///
/// The prompt service owns the memoized model choice, so exactly one lives
/// for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<PromptService>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    pub fn new(prompt_service: PromptService, config: RelayConfig) -> Self {
        Self {
            prompt_service: Arc::new(prompt_service),
            config: Arc::new(config),
        }
    }

    /// Wire the production upstream clients for `config`.
    pub fn init(config: RelayConfig, api_key: &SecretString) -> Self {
        let prompt_service = build_prompt_service(&config, api_key);
        Self::new(prompt_service, config)
    }
}
