//! SDK-style generator over Gemini's OpenAI-compatible endpoint.
//!
//! This is the primary calling convention: a typed [`async_openai`] chat
//! completion against `{openai_base_url}/chat/completions`. When it fails or
//! returns no text the fallback chain moves on to the raw REST client.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use secrecy::{ExposeSecret, SecretString};

use gemrelay_core::llm::provider::TextGenerator;
use gemrelay_types::llm::LlmError;

/// Chat-completions client for an OpenAI-compatible endpoint.
///
/// Does NOT derive Debug, since the `async_openai::Client` holds the API key.
pub struct OpenAiCompatGenerator {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompatGenerator {
    pub fn new(api_key: &SecretString, base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url);

        Self {
            client: Client::with_config(config),
        }
    }

    /// Build a single-user-message chat request.
    fn build_request(model: &str, prompt: &str) -> CreateChatCompletionRequest {
        CreateChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage {
                    content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
                    name: None,
                },
            )],
            ..Default::default()
        }
    }
}

impl TextGenerator for OpenAiCompatGenerator {
    fn name(&self) -> &str {
        "sdk"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .chat()
            .create(Self::build_request(model, prompt))
            .await
            .map_err(map_openai_error)?;

        Ok(response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match err {
        OpenAIError::ApiError(api_err) => LlmError::Provider {
            message: api_err.message,
        },
        OpenAIError::Reqwest(reqwest_err) => LlmError::Transport(reqwest_err.to_string()),
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        other => LlmError::Provider {
            message: other.to_string(),
        },
    }
}
