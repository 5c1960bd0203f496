//! Services composing the llm building blocks.

pub mod prompt;
