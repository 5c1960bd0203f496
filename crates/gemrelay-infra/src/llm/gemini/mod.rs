//! Gemini REST API client.
//!
//! [`GeminiRestClient`] implements both the model catalog lookup and the raw
//! HTTP `generateContent` calling convention.

pub mod client;
pub mod types;

pub use client::GeminiRestClient;
