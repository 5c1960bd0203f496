//! Runtime configuration types for gemrelay.
//!
//! `RelayConfig` holds every non-secret setting. It can be read from a TOML
//! file; all fields have defaults, so an empty file (or none) is valid. The
//! API key is deliberately not part of this struct and is loaded separately.

use serde::{Deserialize, Serialize};

/// Models tried in order when choosing which upstream model to use.
pub const DEFAULT_PREFERRED_MODELS: &[&str] = &[
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash-8b",
    "gemini-1.5-pro",
    "gemini-1.0-pro",
    "gemini-pro",
];

/// Top-level configuration for the relay server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream REST API version segment (e.g. "v1").
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Upstream REST base URL, without the version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL of the upstream's OpenAI-compatible endpoint.
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Directory of static front-end files.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Preferred model names, highest preference first.
    #[serde(default = "default_preferred_models")]
    pub preferred_models: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_version() -> String {
    "v1".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_openai_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_preferred_models() -> Vec<String> {
    DEFAULT_PREFERRED_MODELS
        .iter()
        .map(|m| m.to_string())
        .collect()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_version: default_api_version(),
            base_url: default_base_url(),
            openai_base_url: default_openai_base_url(),
            public_dir: default_public_dir(),
            preferred_models: default_preferred_models(),
        }
    }
}

impl RelayConfig {
    /// Hint shown to callers when no model could be selected.
    pub fn models_hint(&self) -> String {
        format!(
            "Open http://localhost:{}/_models to see what your key can use.",
            self.port
        )
    }
}
