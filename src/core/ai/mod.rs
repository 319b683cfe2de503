//! Completion Providers
//!
//! Language-model completion boundary: a provider trait, request/response
//! types, and the OpenAI implementation. Completion output is untrusted
//! and must pass document validation before use.

pub mod openai;
pub mod provider;

pub use openai::{OpenAIProvider, ProviderConfig};
pub use provider::{
    CompletionProvider, CompletionRequest, CompletionResponse, FinishReason,
    MockCompletionProvider, TokenUsage,
};
