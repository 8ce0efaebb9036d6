//! Migration of the retired singular `replacement_model` field.
//!
//! Early captures stored replacements as one string. Two shapes exist in
//! that data: a plain single model name, and several names run together
//! with the literal token `or` and no separator, e.g.
//! `"gpt-image-1orgpt-image-1-mini"`.

use tracing::debug;

/// Classify a legacy `replacement_model` value into the list form.
///
/// Empty input means no replacement was recorded. A value in the
/// concatenated shape is split on `"or"`; anything else is kept whole as a
/// single-element list.
pub fn migrate_replacement(value: &str) -> Option<Vec<String>> {
    if value.is_empty() {
        return None;
    }

    if let Some(models) = split_concatenated(value) {
        debug!(
            value,
            count = models.len(),
            "split concatenated legacy replacement value"
        );
        return Some(models);
    }

    Some(vec![value.to_string()])
}

/// Detect the concatenated `model1ormodel2` shape.
///
/// Only claims a value when the segments before the first and after the
/// last `"or"` are whitespace-free, so prose like `"model-a or model-b"`
/// stays a single value. A model name legitimately containing `or` with no
/// whitespace around it would be split too; no such name appears in the
/// captured data.
fn split_concatenated(value: &str) -> Option<Vec<String>> {
    if !value.contains("or") {
        return None;
    }

    let head = value.split("or").next().unwrap_or("");
    let tail = value.rsplit("or").next().unwrap_or("");
    if head.chars().any(char::is_whitespace) || tail.chars().any(char::is_whitespace) {
        return None;
    }

    Some(
        value
            .split("or")
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
