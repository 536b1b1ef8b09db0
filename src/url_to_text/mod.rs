pub mod fetchers;
pub mod html;
pub mod text;

use log::debug;

use crate::error::ExtractError;
use crate::model::{ScrapedContent, MIN_CONTENT_CHARS};
use fetchers::RequestFetcher;

/// Fetch a page and reduce it to cleaned main-content text.
///
/// Fails with [`ExtractError::Scrape`] when the page can't be fetched or when fewer
/// than [`MIN_CONTENT_CHARS`] characters of text survive cleaning.
pub async fn scrape(fetcher: &RequestFetcher, url: &str) -> Result<ScrapedContent, ExtractError> {
    let html_content = fetcher.fetch(url).await?;
    let cleaned = text::clean(&html::main_content(&html_content));
    debug!("Extracted {} characters of text from {}", cleaned.len(), url);

    ScrapedContent::new(url, cleaned).ok_or_else(|| {
        ExtractError::Scrape(format!(
            "unable to extract meaningful content from {} (less than {} characters of text)",
            url, MIN_CONTENT_CHARS
        ))
    })
}
