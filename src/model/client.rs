//! HTTP client for the local model endpoint.

use std::env;

use serde::Serialize;
use tracing::debug;

use crate::error::ModelError;
use crate::prompt::{Conversation, Message};

use super::GenerationResult;
use super::response::ChatCompletionResponse;

/// Default LM Studio server address.
pub const DEFAULT_API_BASE: &str = "http://localhost:1234";

/// Environment variable to override the endpoint base URL.
pub const API_BASE_ENV_VAR: &str = "EPIGRAPH_API_BASE";

const COMPLETIONS_PATH: &str = "/api/v0/chat/completions";

/// Output-token sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingProfile {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub min_p: f64,
}

/// The fixed, non-configurable profile used for every generation.
///
/// Low temperature and tight nucleus bounds favor a consistent commit
/// message style over creative diversity.
pub const COMMIT_MESSAGE_SAMPLING: SamplingProfile = SamplingProfile {
    temperature: 0.25,
    top_k: 20,
    top_p: 0.8,
    min_p: 0.05,
};

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    /// -1 requests unlimited output length.
    max_tokens: i64,
    temperature: f64,
    top_k: u32,
    top_p: f64,
    min_p: f64,
}

/// Client for the chat completions endpoint.
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
}

impl ModelClient {
    /// Create a client for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client from the environment, falling back to the default
    /// LM Studio address.
    pub fn from_env() -> Self {
        let base = env::var(API_BASE_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(base)
    }

    /// Request a completion for a conversation with the fixed sampling
    /// profile and return the final-answer text.
    ///
    /// Any transport, API, or decode failure is fatal for the run; there is
    /// no retry.
    pub async fn complete(
        &self,
        model: &str,
        conversation: &Conversation,
    ) -> Result<GenerationResult, ModelError> {
        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);
        let sampling = COMMIT_MESSAGE_SAMPLING;

        let request = CompletionRequest {
            model,
            messages: &conversation.messages,
            stream: false,
            max_tokens: -1,
            temperature: sampling.temperature,
            top_k: sampling.top_k,
            top_p: sampling.top_p,
            min_p: sampling.min_p,
        };

        debug!("Requesting completion from {url} with model '{model}'");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| ModelError::RequestFailed {
                base_url: self.base_url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(ModelError::DecodeFailed)?;

        let text = completion.final_text()?;
        Ok(GenerationResult { text })
    }
}
