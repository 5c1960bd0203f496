//! Preference-ordered model selection.

use gemrelay_types::llm::ModelCatalog;

use super::box_provider::BoxCatalogSource;

/// Picks one model name from a catalog using a fixed preference list.
#[derive(Debug, Clone)]
pub struct ModelSelector {
    preferences: Vec<String>,
}

impl ModelSelector {
    pub fn new(preferences: Vec<String>) -> Self {
        Self { preferences }
    }

    /// Choose a model from `catalog`.
    ///
    /// The preference list order is authoritative. Catalog order only matters
    /// when no preferred name is present, in which case the first model
    /// supporting `generateContent` wins.
    pub fn select(&self, catalog: &ModelCatalog) -> Option<String> {
        if let Some(preferred) = self.preferences.iter().find(|p| catalog.contains(p)) {
            return Some(preferred.clone());
        }
        catalog
            .first_text_capable()
            .map(|m| m.short_name().to_string())
    }

    /// Look up the catalog and choose a model.
    ///
    /// A failed lookup is logged and yields `None`, same as a catalog with
    /// nothing usable in it.
    pub async fn resolve(&self, source: &BoxCatalogSource) -> Option<String> {
        match source.list_models().await {
            Ok(catalog) => {
                let selected = self.select(&catalog);
                if selected.is_none() {
                    tracing::warn!(
                        models = catalog.models.len(),
                        "Catalog has no preferred or text-capable model"
                    );
                }
                selected
            }
            Err(err) => {
                tracing::error!(error = %err, "Model catalog lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemrelay_types::llm::{GENERATE_CONTENT, LlmError, ModelDescriptor};

    use crate::llm::provider::CatalogSource;

    fn descriptor(name: &str, methods: &[&str]) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
            display_name: None,
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn selector() -> ModelSelector {
        ModelSelector::new(vec![
            "gemini-1.5-flash".to_string(),
            "gemini-1.5-pro".to_string(),
        ])
    }

    struct StaticCatalog(Result<serde_json::Value, LlmError>);

    impl CatalogSource for StaticCatalog {
        async fn fetch_raw(&self) -> Result<serde_json::Value, LlmError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_preference_order_beats_catalog_order() {
        let catalog = ModelCatalog {
            models: vec![
                descriptor("models/gemini-1.5-pro", &[GENERATE_CONTENT]),
                descriptor("models/gemini-1.5-flash", &[GENERATE_CONTENT]),
            ],
        };
        assert_eq!(selector().select(&catalog).as_deref(), Some("gemini-1.5-flash"));
    }

    #[test]
    fn test_falls_back_to_first_text_capable() {
        let catalog = ModelCatalog {
            models: vec![
                descriptor("models/embedding-001", &["embedContent"]),
                descriptor("models/gemini-1.0-pro", &[GENERATE_CONTENT]),
                descriptor("models/gemini-ultra", &[GENERATE_CONTENT]),
            ],
        };
        assert_eq!(selector().select(&catalog).as_deref(), Some("gemini-1.0-pro"));
    }

    #[test]
    fn test_no_usable_model() {
        let catalog = ModelCatalog {
            models: vec![descriptor("models/embedding-001", &["embedContent"])],
        };
        assert!(selector().select(&catalog).is_none());
        assert!(selector().select(&ModelCatalog::default()).is_none());
    }

    #[test]
    fn test_unprefixed_catalog_names_match() {
        let catalog = ModelCatalog {
            models: vec![descriptor("gemini-1.5-pro", &[])],
        };
        assert_eq!(selector().select(&catalog).as_deref(), Some("gemini-1.5-pro"));
    }

    #[tokio::test]
    async fn test_resolve_lookup_failure_is_none() {
        let source = BoxCatalogSource::new(StaticCatalog(Err(LlmError::UpstreamUnavailable(
            "ListModels failed: 403 Forbidden".to_string(),
        ))));
        assert!(selector().resolve(&source).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_parses_raw_catalog() {
        let source = BoxCatalogSource::new(StaticCatalog(Ok(serde_json::json!({
            "models": [{
                "name": "models/gemini-1.0-pro",
                "supportedGenerationMethods": ["generateContent"]
            }]
        }))));
        assert_eq!(
            selector().resolve(&source).await.as_deref(),
            Some("gemini-1.0-pro")
        );
    }

    #[tokio::test]
    async fn test_resolve_malformed_catalog_is_none() {
        let source = BoxCatalogSource::new(StaticCatalog(Ok(serde_json::json!({
            "models": "not-a-list"
        }))));
        assert!(selector().resolve(&source).await.is_none());
    }
}
