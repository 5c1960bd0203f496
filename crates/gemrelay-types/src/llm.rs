//! Upstream model types for gemrelay.
//!
//! These types model the data shapes exchanged with the generative-language
//! provider: the model catalog, a single generation result, and the
//! provider-level error type.

use serde::{Deserialize, Serialize};

/// Generation method a model must support to be usable for text prompts.
pub const GENERATE_CONTENT: &str = "generateContent";

/// Prefix the upstream puts in front of every model name.
const MODEL_NAME_PREFIX: &str = "models/";

/// A single model the credential can access, as reported by the upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Fully qualified name, e.g. `models/gemini-1.5-flash`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Operation names this model supports (e.g. `generateContent`).
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelDescriptor {
    /// Name without the leading `models/` prefix.
    pub fn short_name(&self) -> &str {
        self.name
            .strip_prefix(MODEL_NAME_PREFIX)
            .unwrap_or(&self.name)
    }

    /// Whether this model advertises the given generation method.
    pub fn supports(&self, method: &str) -> bool {
        self.supported_generation_methods.iter().any(|m| m == method)
    }
}

/// The set of models an access credential is authorized to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

impl ModelCatalog {
    /// Whether the catalog lists `name`, either bare or `models/`-prefixed.
    pub fn contains(&self, name: &str) -> bool {
        self.models
            .iter()
            .any(|m| m.name == name || m.short_name() == name)
    }

    /// First model (in catalog order) supporting `generateContent`.
    pub fn first_text_capable(&self) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.supports(GENERATE_CONTENT))
    }
}

/// Text produced for a prompt, plus the generator that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Generated text; may be empty when the upstream produced nothing.
    pub text: String,
    /// Name of the calling convention that answered (e.g. "sdk", "rest").
    pub generator: String,
}

/// Errors from upstream provider operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Non-success response from a generation call.
    #[error("upstream returned {status} {status_text}")]
    UpstreamStatus {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The model catalog could not be obtained.
    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("provider error: {message}")]
    Provider { message: String },
}
