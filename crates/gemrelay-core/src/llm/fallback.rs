//! Ordered-attempt dispatch across calling conventions.
//!
//! Generators are tried in the order they were given. A failure or an empty
//! answer from any generator except the last is logged and swallowed; the
//! last generator's outcome is returned as-is. There is no retry loop: each
//! generator is called at most once per request.

use gemrelay_types::llm::{Generation, LlmError};

use super::box_provider::BoxTextGenerator;

/// Result of a successful generation through the chain.
#[derive(Debug)]
pub struct FallbackResult {
    /// The generated text and the generator that produced it.
    pub generation: Generation,
    /// Set when the request was answered by a non-primary generator.
    pub failover_warning: Option<String>,
}

/// Tries each generator in turn until one produces text.
pub struct FallbackChain {
    generators: Vec<BoxTextGenerator>,
}

impl FallbackChain {
    /// Create a chain; the first generator is the primary.
    pub fn new(generators: Vec<BoxTextGenerator>) -> Self {
        Self { generators }
    }

    /// Names of the generators in attempt order.
    pub fn generator_names(&self) -> Vec<&str> {
        self.generators.iter().map(BoxTextGenerator::name).collect()
    }

    fn primary_name(&self) -> &str {
        self.generators.first().map_or("", BoxTextGenerator::name)
    }

    fn build_failover_warning(&self, used: &str) -> Option<String> {
        if used == self.primary_name() {
            return None;
        }
        Some(format!(
            "Switched to {used} after {} produced no text",
            self.primary_name()
        ))
    }

    /// Generate text for `prompt` with `model`.
    ///
    /// Returns the first non-empty answer from a non-final generator, or
    /// whatever the final generator returns (its text may be empty, and its
    /// error is surfaced to the caller).
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<FallbackResult, LlmError> {
        let Some((last, rest)) = self.generators.split_last() else {
            return Err(LlmError::Provider {
                message: "no text generators configured".to_string(),
            });
        };

        for generator in rest {
            match generator.generate(model, prompt).await {
                Ok(text) if !text.is_empty() => {
                    return Ok(self.finish(generator.name(), text));
                }
                Ok(_) => {
                    tracing::warn!(
                        generator = generator.name(),
                        %model,
                        "Generator returned no text, trying next in chain"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        generator = generator.name(),
                        %model,
                        error = %err,
                        "Generator failed, trying next in chain"
                    );
                }
            }
        }

        let text = last.generate(model, prompt).await.inspect_err(|err| {
            tracing::error!(generator = last.name(), %model, error = %err, "Final generator failed");
        })?;
        Ok(self.finish(last.name(), text))
    }

    fn finish(&self, generator: &str, text: String) -> FallbackResult {
        let failover_warning = self.build_failover_warning(generator);
        FallbackResult {
            generation: Generation {
                text,
                generator: generator.to_string(),
            },
            failover_warning,
        }
    }
}
