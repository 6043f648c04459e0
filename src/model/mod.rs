//! Model invocation against a local LM Studio compatible endpoint.

pub mod client;
pub mod response;

pub use client::{COMMIT_MESSAGE_SAMPLING, ModelClient, SamplingProfile};
pub use response::ChatCompletionResponse;

/// The model's final-answer text, reasoning excluded and whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
}
