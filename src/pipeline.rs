use log::{debug, info};
use std::sync::Arc;

use crate::config::AzureOpenAiConfig;
use crate::error::ExtractError;
use crate::model::{ExtractedRecipe, ExtractionRequest};
use crate::normalizer::normalize;
use crate::providers::{build_prompt, AzureOpenAIProvider, CompletionProvider, RetryingProvider};
use crate::resolver::{resolve, InputSource};
use crate::url_to_text::{self, fetchers::RequestFetcher};

/// Runs one request through resolve → scrape → prompt → complete → normalize.
///
/// Holds no per-request state; share it behind an `Arc` across requests.
pub struct RecipeExtractor {
    fetcher: RequestFetcher,
    provider: Arc<dyn CompletionProvider>,
}

impl RecipeExtractor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Result<Self, ExtractError> {
        Ok(Self {
            fetcher: RequestFetcher::new(None)?,
            provider,
        })
    }

    /// Build the extractor backed by Azure OpenAI with retries.
    pub fn from_config(config: &AzureOpenAiConfig) -> Result<Self, ExtractError> {
        let azure = AzureOpenAIProvider::new(config)?;
        let provider = RetryingProvider::from_config(Box::new(azure), config);
        Self::new(Arc::new(provider))
    }

    pub async fn extract(&self, request: &ExtractionRequest) -> Result<ExtractedRecipe, ExtractError> {
        let (body, original_url) = match resolve(request)? {
            InputSource::Url(url) => {
                info!("Extracting recipe from {}", url);
                let scraped = url_to_text::scrape(&self.fetcher, &url).await?;
                (scraped.cleaned_text, Some(scraped.source_url))
            }
            InputSource::Text(text) => {
                debug!(
                    "Received text for extraction: {}...",
                    text.chars().take(100).collect::<String>()
                );
                (text, None)
            }
        };

        let prompt = build_prompt(&body);
        let raw = self.provider.complete(&prompt.system, &prompt.user).await?;

        let recipe = normalize(&raw, original_url.as_deref())?;
        debug!("Normalized recipe: {:?}", recipe);
        Ok(recipe)
    }
}
