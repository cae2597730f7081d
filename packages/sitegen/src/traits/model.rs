//! Completion model trait for LLM text generation.

use async_trait::async_trait;

use crate::error::Result;

/// A language model capable of one bounded text completion.
///
/// Implementations wrap a specific LLM provider and handle transport,
/// credentials, and response decoding. The pipeline makes exactly one call
/// per generation; there is no retry and no streaming at this seam.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Produce a single text completion for the given system and user
    /// prompts, with output bounded by `max_tokens`.
    async fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<String>;
}
