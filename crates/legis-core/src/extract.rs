//! Flattening of raw `search` responses into [`ExtractedItem`]s.
//!
//! The response shape is owned by the API and only partly documented, so
//! every field goes through its own mapping function with a fixed fallback.
//! A malformed record never fails the whole extraction.
//!
//! Scalars are read leniently: strings as-is, numbers and booleans rendered
//! as text, `null` treated as missing.

use serde_json::Value;
use tracing::debug;

use crate::models::{Excerpt, ExtractedItem};

pub const DEFAULT_TITLE: &str = "Sans titre";
pub const DEFAULT_NATURE: &str = "Non spécifiée";
pub const DEFAULT_DATE: &str = "Date inconnue";
pub const DEFAULT_ARTICLE_NUMBER: &str = "Non numéroté";

/// Extracts one item per entry of the response's `results` array.
///
/// Returns an empty list when the response is absent or has no `results`
/// array.
///
/// # Examples
///
/// ```
/// use legis_core::extract::extract_results;
/// use serde_json::json;
///
/// let response = json!({"results": [{"nature": "LOI", "date": "2020-01-01"}]});
/// let items = extract_results(Some(&response));
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].title, "Sans titre");
/// assert_eq!(items[0].nature, "LOI");
/// assert_eq!(items[0].id, None);
/// ```
pub fn extract_results(response: Option<&Value>) -> Vec<ExtractedItem> {
    let Some(results) = response
        .and_then(|r| r.get("results"))
        .and_then(Value::as_array)
    else {
        debug!("Response has no results array, nothing to extract");
        return Vec::new();
    };

    results.iter().map(extract_item).collect()
}

/// Maps a single raw record.
pub fn extract_item(record: &Value) -> ExtractedItem {
    ExtractedItem {
        title: extract_title(record),
        nature: extract_nature(record),
        date: extract_date(record),
        id: extract_id(record),
        excerpts: extract_excerpts(record),
    }
}

/// `titles[0].title`, else [`DEFAULT_TITLE`].
pub fn extract_title(record: &Value) -> String {
    first_title(record)
        .and_then(|t| text_field(t, "title"))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// `nature`, else [`DEFAULT_NATURE`].
pub fn extract_nature(record: &Value) -> String {
    text_field(record, "nature").unwrap_or_else(|| DEFAULT_NATURE.to_string())
}

/// `date`, else [`DEFAULT_DATE`].
pub fn extract_date(record: &Value) -> String {
    text_field(record, "date").unwrap_or_else(|| DEFAULT_DATE.to_string())
}

/// `id`, else `titles[0].id`, else `None`.
///
/// The record-level id wins when both are present.
pub fn extract_id(record: &Value) -> Option<String> {
    text_field(record, "id").or_else(|| first_title(record).and_then(|t| text_field(t, "id")))
}

/// Walks `sections[].extracts[]`; missing levels yield no excerpts.
pub fn extract_excerpts(record: &Value) -> Vec<Excerpt> {
    array_field(record, "sections")
        .flat_map(|section| array_field(section, "extracts"))
        .map(extract_excerpt)
        .collect()
}

/// Maps one entry of a section's `extracts`.
pub fn extract_excerpt(extract: &Value) -> Excerpt {
    Excerpt {
        article_number: text_field(extract, "num")
            .unwrap_or_else(|| DEFAULT_ARTICLE_NUMBER.to_string()),
        text: extract
            .get("values")
            .and_then(Value::as_array)
            .and_then(|values| values.first())
            .and_then(scalar_text)
            .unwrap_or_default(),
        id: text_field(extract, "id").unwrap_or_default(),
    }
}

fn first_title(record: &Value) -> Option<&Value> {
    record
        .get("titles")
        .and_then(Value::as_array)
        .and_then(|titles| titles.first())
}

fn array_field<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
