//! Infrastructure layer for gemrelay.
//!
//! Contains implementations of the provider traits defined in `gemrelay-core`
//! (the Gemini REST client and the OpenAI-compatible SDK client) and the
//! startup configuration loader.

pub mod config;
pub mod llm;
