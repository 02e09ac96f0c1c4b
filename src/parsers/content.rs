use serde_json::Value;

/// Fields that may carry the text of a content element, in priority order
pub const TEXT_FIELDS: [&str; 3] = ["text", "input_text", "output_text"];

/// First non-empty string found under [`TEXT_FIELDS`] in a content element.
/// Elements that are not JSON objects carry no text.
pub fn element_text(element: &Value) -> Option<&str> {
    let object = element.as_object()?;
    TEXT_FIELDS
        .iter()
        .find_map(|field| object.get(*field).and_then(Value::as_str).filter(|s| !s.is_empty()))
}

/// Extract message text from a payload's `content` field.
///
/// A sequence of elements is joined with newlines; a plain string is used directly. The
/// result is trimmed, and an empty result is `None`.
pub fn extract_text(content: &Value) -> Option<String> {
    let text = match content {
        Value::Array(elements) => {
            let fragments: Vec<&str> = elements.iter().filter_map(element_text).collect();
            fragments.join("\n").trim().to_string()
        }
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    if text.is_empty() { None } else { Some(text) }
}
