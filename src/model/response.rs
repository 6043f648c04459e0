//! Decoding of chat completion responses.
//!
//! Reasoning models return their chain of thought either as a structured
//! `reasoning_content` field or inline inside `<think>` tags. Only the
//! final-answer portion ever leaves this module.

use serde::Deserialize;

use crate::error::ModelError;

/// Top-level chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

/// The assistant message of a choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: String,
    /// Structured reasoning trace, present for reasoning models. Never
    /// included in the final text.
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

impl ChatCompletionResponse {
    /// Extract the final-answer text from the first choice.
    pub fn final_text(&self) -> Result<String, ModelError> {
        let choice = self.choices.first().ok_or(ModelError::EmptyResponse)?;
        Ok(strip_inline_reasoning(&choice.message.content).trim().to_string())
    }
}

/// Drop an inline `<think>...</think>` span, keeping everything after it.
fn strip_inline_reasoning(content: &str) -> &str {
    match content.rfind("</think>") {
        Some(idx) => &content[idx + "</think>".len()..],
        None => content,
    }
}
