//! Text-generation capability used to rewrite fragments.
//!
//! The pipeline only sees [`TextGenerator`]; the Gemini HTTP client is one
//! implementation and tests substitute their own.

pub mod gemini;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

/// A single prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<String, GenerationError>;
}

