use serde_json::{json, Value};

/// The system prompt template used for extracting recipes from free text.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
///
/// Contains a `{{SCHEMA}}` placeholder that [`build_prompt`] replaces with the
/// serialized [`extraction_schema`].
pub const RECIPE_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");

/// The two messages sent to the completion API
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// JSON schema describing the recipe the model should return.
///
/// Only embedded in the prompt; replies are not validated against it.
pub fn extraction_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "The name/title of the recipe"
            },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of ingredients with quantities"
            },
            "steps": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Step-by-step cooking instructions"
            },
            "cuisine": {
                "type": "string",
                "description": "The cuisine type (e.g., Chinese, Western, Japanese, etc.)"
            },
            "image": {
                "type": "string",
                "description": "Image URL if mentioned in the text, otherwise empty string"
            },
            "sourceUrl": {
                "type": "string",
                "description": "Source URL if mentioned in the text, otherwise empty string"
            }
        },
        "required": ["title", "ingredients", "steps", "cuisine"]
    })
}

/// Build the system and user messages for a recipe body.
///
/// The body is passed through untouched; no truncation happens here.
pub fn build_prompt(body: &str) -> Prompt {
    Prompt {
        system: RECIPE_EXTRACTION_PROMPT.replace("{{SCHEMA}}", &extraction_schema().to_string()),
        user: body.to_string(),
    }
}
