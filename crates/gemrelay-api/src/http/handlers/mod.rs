//! HTTP request handlers.

pub mod debug;
pub mod prompt;
