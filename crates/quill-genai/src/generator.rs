//! The text-generation seam.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GenAiError;

/// A single user-role prompt, answered with JSON only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
}

impl GenerationRequest {
    #[must_use]
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// External text-generation service.
///
/// Implementations hold no conversation memory: every call is independent.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the raw response text.
    async fn generate_text(&self, request: GenerationRequest) -> Result<String, GenAiError>;
}

#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for Arc<G> {
    async fn generate_text(&self, request: GenerationRequest) -> Result<String, GenAiError> {
        (**self).generate_text(request).await
    }
}
