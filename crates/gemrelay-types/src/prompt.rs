//! Validated user prompt.

use crate::error::RelayError;

/// A non-empty, trimmed prompt submitted by a caller.
///
/// The only way to build one is [`PromptRequest::new`], so holding a
/// `PromptRequest` means validation already happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest(String);

impl PromptRequest {
    /// Trim `raw` and reject it if nothing is left.
    pub fn new(raw: &str) -> Result<Self, RelayError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RelayError::EmptyPrompt);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Like [`PromptRequest::new`], treating a missing prompt as empty.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, RelayError> {
        Self::new(raw.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
