//! Completion provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for text-completion providers
///
/// Implementations of this trait provide access to a hosted language model
/// (or, in tests, a deterministic stub). The dashboard treats the model as
/// an opaque text-in/text-out capability.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the given request
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;
}
