//! Upstream model abstractions for gemrelay.
//!
//! - `TextGenerator` / `CatalogSource`: RPITIT traits for concrete providers
//! - `BoxTextGenerator` / `BoxCatalogSource`: object-safe wrappers
//! - `FallbackChain`: ordered-attempt dispatch across calling conventions
//! - `ModelSelector` + `SelectedModelCache`: preference-ordered, memoized model choice

pub mod box_provider;
pub mod cache;
pub mod fallback;
pub mod provider;
pub mod selector;
