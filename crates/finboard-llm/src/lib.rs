//! Text-completion capability for finboard
//!
//! This crate abstracts the hosted language model the dashboard delegates
//! to. It includes:
//!
//! - Completion request/response types
//! - A provider trait for completion implementations
//! - A concrete OpenAI-compatible provider (behind the `openai` feature)
//!
//! The contract is deliberately small: one prompt in, one generated text
//! out, with an optional output-token bound. Anything that needs richer
//! chat semantics does not belong here.

pub mod completion;
pub mod error;
pub mod provider;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use error::{CompletionError, Result};
pub use provider::CompletionProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
