//! External providers
//!
//! Two optional outbound services, each behind a trait so the scorer and
//! narrative selector can be built with real HTTP clients or test fakes:
//! - `TextGenerator`: chat-completion style story generation
//! - `CarbonAccounting`: remote footprint estimate for an answer set
//!
//! Both are best-effort. Callers make a single attempt and fall back to the
//! local path on any `ProviderError`.

pub mod carbon_api;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::answers::AnswerSet;

pub use carbon_api::CarbonApiClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("credentials rejected (HTTP {0})")]
    Unauthorized(u16),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ProviderError {
    /// Map a reqwest failure, keeping timeouts distinguishable
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(timeout)
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }

    /// Map a non-success status code
    pub(crate) fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            code @ (401 | 403) => ProviderError::Unauthorized(code),
            code => ProviderError::Status {
                status: code,
                body: truncate(&body, 200),
            },
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Text-generation request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate one text blob for the request
    async fn generate(&self, request: &ChatRequest) -> Result<String, ProviderError>;
}

#[async_trait]
pub trait CarbonAccounting: Send + Sync {
    /// Annual footprint in kg CO2e as reported by the provider
    async fn total_kg(&self, answers: &AnswerSet) -> Result<f64, ProviderError>;
}
