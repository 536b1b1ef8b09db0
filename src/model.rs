use serde::{Deserialize, Serialize};

/// Minimum length, in characters, of page text worth sending to the model.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Cuisine used when none can be inferred.
pub const DEFAULT_CUISINE: &str = "Western";

/// Incoming extraction request. At most one of the two inputs is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ExtractionRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            url: None,
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            text: None,
            url: Some(url.into()),
        }
    }
}

/// Cleaned page text, only produced on the URL path.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedContent {
    pub source_url: String,
    pub cleaned_text: String,
}

impl ScrapedContent {
    /// Returns `None` when the text is shorter than [`MIN_CONTENT_CHARS`].
    pub fn new(source_url: impl Into<String>, cleaned_text: String) -> Option<Self> {
        if cleaned_text.chars().count() < MIN_CONTENT_CHARS {
            return None;
        }
        Some(Self {
            source_url: source_url.into(),
            cleaned_text,
        })
    }
}

/// Fully normalized recipe returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cuisine: String,
    pub image: String,
    pub source_url: String,
}

impl Default for ExtractedRecipe {
    fn default() -> Self {
        Self {
            title: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            cuisine: DEFAULT_CUISINE.to_string(),
            image: String::new(),
            source_url: String::new(),
        }
    }
}
