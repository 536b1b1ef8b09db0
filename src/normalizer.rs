use log::debug;
use serde_json::Value;

use crate::error::ExtractError;
use crate::model::{ExtractedRecipe, DEFAULT_CUISINE};

/// Parse the model's reply and fill every missing field with its default.
///
/// Empty strings, empty arrays, `null`, `false`, `0` and values of the wrong type all
/// count as missing. `original_url`, when given, always wins over the model's
/// `sourceUrl`. Content that isn't JSON is a [`ExtractError::MalformedResponse`].
pub fn normalize(raw: &str, original_url: Option<&str>) -> Result<ExtractedRecipe, ExtractError> {
    let parsed: Value = serde_json::from_str(raw)?;
    debug!("Extracted recipe: {}", parsed);

    let source_url = original_url
        .filter(|url| !url.is_empty())
        .map(String::from)
        .or_else(|| string_field(&parsed, "sourceUrl"))
        .unwrap_or_default();

    Ok(ExtractedRecipe {
        title: string_field(&parsed, "title").unwrap_or_default(),
        ingredients: list_field(&parsed, "ingredients").unwrap_or_default(),
        steps: list_field(&parsed, "steps").unwrap_or_default(),
        cuisine: string_field(&parsed, "cuisine").unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
        image: string_field(&parsed, "image").unwrap_or_default(),
        source_url,
    })
}

fn string_field(parsed: &Value, key: &str) -> Option<String> {
    match parsed.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn list_field(parsed: &Value, key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = match parsed.get(key)? {
        Value::Array(values) => values.iter().filter_map(list_item).collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => return None,
    };

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn list_item(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
