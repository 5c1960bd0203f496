//! Object-safe dynamic dispatch wrappers for the provider traits.
//!
//! Same blanket-impl pattern for both traits:
//! 1. Define an object-safe `*Dyn` trait with boxed futures
//! 2. Blanket-impl it for every implementor of the RPITIT trait
//! 3. The `Box*` wrapper holds `Box<dyn *Dyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use gemrelay_types::llm::{LlmError, ModelCatalog};

use super::provider::{CatalogSource, TextGenerator};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`TextGenerator`].
pub trait TextGeneratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        model: &'a str,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, LlmError>>;
}

impl<T: TextGenerator> TextGeneratorDyn for T {
    fn name(&self) -> &str {
        TextGenerator::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        model: &'a str,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, LlmError>> {
        Box::pin(self.generate(model, prompt))
    }
}

/// Type-erased text generator, so the fallback chain can hold
/// heterogeneous calling conventions.
pub struct BoxTextGenerator {
    inner: Box<dyn TextGeneratorDyn + Send + Sync>,
}

impl BoxTextGenerator {
    /// Wrap a concrete `TextGenerator` in a type-erased box.
    pub fn new<T: TextGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Generate text for `prompt` using `model`.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        self.inner.generate_boxed(model, prompt).await
    }
}

/// Object-safe version of [`CatalogSource`].
pub trait CatalogSourceDyn: Send + Sync {
    fn fetch_raw_boxed(&self) -> BoxFuture<'_, Result<serde_json::Value, LlmError>>;

    fn list_models_boxed(&self) -> BoxFuture<'_, Result<ModelCatalog, LlmError>>;
}

impl<T: CatalogSource> CatalogSourceDyn for T {
    fn fetch_raw_boxed(&self) -> BoxFuture<'_, Result<serde_json::Value, LlmError>> {
        Box::pin(self.fetch_raw())
    }

    fn list_models_boxed(&self) -> BoxFuture<'_, Result<ModelCatalog, LlmError>> {
        Box::pin(self.list_models())
    }
}

/// Type-erased catalog source.
pub struct BoxCatalogSource {
    inner: Box<dyn CatalogSourceDyn + Send + Sync>,
}

impl BoxCatalogSource {
    /// Wrap a concrete `CatalogSource` in a type-erased box.
    pub fn new<T: CatalogSource + 'static>(source: T) -> Self {
        Self {
            inner: Box::new(source),
        }
    }

    /// Fetch the catalog exactly as the upstream returned it.
    pub async fn fetch_raw(&self) -> Result<serde_json::Value, LlmError> {
        self.inner.fetch_raw_boxed().await
    }

    /// Fetch and parse the catalog.
    pub async fn list_models(&self) -> Result<ModelCatalog, LlmError> {
        self.inner.list_models_boxed().await
    }
}
