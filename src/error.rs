use thiserror::Error;

use crate::providers::ProviderError;

/// Errors that can occur while extracting a recipe
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The request carried neither usable text nor a valid URL
    #[error("{0}")]
    Validation(String),

    /// Fetching or reducing the web page failed
    #[error("Failed to scrape URL: {0}")]
    Scrape(String),

    /// The completion API call failed
    #[error("Extraction API error: {0}")]
    ExtractionApi(#[from] ProviderError),

    /// The completion API replied with content that is not JSON
    #[error("Model returned malformed JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractError {
    /// Whether the failure is caused by the caller's input rather than by this service
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExtractError::Validation(_) | ExtractError::Scrape(_))
    }
}

impl From<config::ConfigError> for ExtractError {
    fn from(err: config::ConfigError) -> Self {
        ExtractError::Config(err.to_string())
    }
}
