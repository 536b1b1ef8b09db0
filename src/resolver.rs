use url::Url;

use crate::error::ExtractError;
use crate::model::ExtractionRequest;

pub const MISSING_INPUT_MESSAGE: &str = "Either text or a valid URL must be provided";

/// Where the recipe body comes from for a single request
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Scrape the page at this URL (kept exactly as the caller sent it)
    Url(String),
    /// Use caller-supplied text as-is
    Text(String),
}

/// Pick the execution path for a request.
///
/// A valid `http`/`https` URL wins over `text` even when both are present.
pub fn resolve(request: &ExtractionRequest) -> Result<InputSource, ExtractError> {
    if let Some(url) = request.url.as_deref().filter(|u| is_valid_url(u)) {
        return Ok(InputSource::Url(url.to_string()));
    }

    match request.text.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(InputSource::Text(text.to_string())),
        _ => Err(ExtractError::Validation(MISSING_INPUT_MESSAGE.to_string())),
    }
}

fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: Option<&str>, url: Option<&str>) -> ExtractionRequest {
        ExtractionRequest {
            text: text.map(String::from),
            url: url.map(String::from),
        }
    }

    #[test]
    fn test_text_only() {
        let source = resolve(&request(Some("2 eggs, whisk"), None)).unwrap();
        assert_eq!(source, InputSource::Text("2 eggs, whisk".to_string()));
    }

    #[test]
    fn test_url_only() {
        let source = resolve(&request(None, Some("https://a.example/x"))).unwrap();
        assert_eq!(source, InputSource::Url("https://a.example/x".to_string()));
    }

    #[test]
    fn test_valid_url_wins_over_text() {
        let source = resolve(&request(Some("some text"), Some("https://a.example/x"))).unwrap();
        assert_eq!(source, InputSource::Url("https://a.example/x".to_string()));
    }

    #[test]
    fn test_invalid_url_falls_back_to_text() {
        let source = resolve(&request(Some("some text"), Some("not a url"))).unwrap();
        assert_eq!(source, InputSource::Text("some text".to_string()));
    }

    #[test]
    fn test_unsupported_scheme_is_not_a_url() {
        let source = resolve(&request(Some("some text"), Some("ftp://a.example/x"))).unwrap();
        assert_eq!(source, InputSource::Text("some text".to_string()));

        assert!(resolve(&request(None, Some("mailto:cook@a.example"))).is_err());
    }

    #[test]
    fn test_invalid_url_without_text_is_validation_error() {
        let err = resolve(&request(None, Some("not a url"))).unwrap_err();
        assert!(matches!(err, ExtractError::Validation(_)));
        assert_eq!(err.to_string(), MISSING_INPUT_MESSAGE);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(resolve(&request(None, None)).is_err());
        assert!(resolve(&request(Some(""), Some(""))).is_err());
        assert!(resolve(&request(Some("   \n\t"), None)).is_err());
    }
}
