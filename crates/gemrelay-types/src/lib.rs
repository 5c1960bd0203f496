//! Shared domain types for gemrelay.
//!
//! Model catalog shapes, prompt validation, the provider and relay error
//! taxonomies, and the runtime configuration struct.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
