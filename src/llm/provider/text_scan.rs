//! Best-effort text scan for Ollama replies that did not decode cleanly.
//!
//! Only used after structured extraction has failed. It looks for a
//! `response` or `content` field in loosely JSON-shaped text and takes
//! whatever follows the next colon. A value that itself contains a comma
//! is cut at that comma.

/// Field names checked in each fragment, in priority order.
const FIELD_KEYS: [&str; 2] = ["response", "content"];

/// Punctuation trimmed from both ends of a scraped value.
const NOISE: [char; 6] = ['"', '\'', '{', '}', '[', ']'];

fn is_noise(c: char) -> bool {
    c.is_whitespace() || NOISE.contains(&c)
}

/// Scans comma-separated fragments of `raw` for a non-empty field value.
///
/// # Example
/// ```
/// use wizard_commit::llm::provider::text_scan::scan_message_field;
///
/// assert_eq!(
///     scan_message_field(r#"{"foo":"response: update docs"}"#).as_deref(),
///     Some("update docs")
/// );
/// assert_eq!(scan_message_field("not json at all"), None);
/// ```
pub fn scan_message_field(raw: &str) -> Option<String> {
    raw.split(',').find_map(|fragment| {
        let key_end = FIELD_KEYS
            .iter()
            .filter_map(|key| fragment.find(key).map(|i| i + key.len()))
            .min()?;
        let (_, value) = fragment[key_end..].split_once(':')?;
        let value = value.trim_matches(is_noise);
        (!value.is_empty()).then(|| value.to_string())
    })
}
