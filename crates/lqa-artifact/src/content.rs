//! Content-count heuristics for manifest payloads.

/// Count items in a JSON manifest: the length of a top-level array, or of a
/// `.prompts` array on a top-level object. Anything else, including malformed
/// JSON, yields `None`.
pub(crate) fn count_json(bytes: &[u8]) -> Option<u32> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    let items = match &value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(map) => map.get("prompts")?.as_array()?,
        _ => return None,
    };
    Some(items.len() as u32)
}

/// One content item per non-blank line.
pub(crate) fn count_lines(bytes: &[u8]) -> u32 {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count() as u32
}
