mod azure_openai;
mod prompt;
mod retry;

pub use azure_openai::AzureOpenAIProvider;
pub use prompt::{build_prompt, extraction_schema, Prompt, RECIPE_EXTRACTION_PROMPT};
pub use retry::RetryingProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Failures talking to a completion API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network-level failure (DNS, TLS, connection reset)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The API answered with a non-success status
    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered with a body that doesn't follow the chat completion shape
    #[error("invalid API response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Request(e) => e.is_connect() || e.is_timeout(),
            ProviderError::Timeout(_) => true,
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            ProviderError::InvalidResponse(_) => false,
        }
    }
}

/// A chat-style structured completion API
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name (e.g., "azure_openai")
    fn provider_name(&self) -> &str;

    /// Send the system and user messages and return the raw JSON text of the reply
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}
