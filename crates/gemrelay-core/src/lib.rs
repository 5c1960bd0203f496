//! Business logic and provider trait definitions for gemrelay.
//!
//! This crate defines the "ports" (catalog and generator traits) that the
//! infrastructure layer implements. It depends only on `gemrelay-types` --
//! never on `gemrelay-infra` or any HTTP client crate.

pub mod llm;
pub mod service;
