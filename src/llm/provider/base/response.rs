//! Response text handling
//!
//! Normalization of extracted text, safe previews for logs/errors, and a
//! serde helper for envelopes that send `null` instead of an empty array.

use serde::{Deserialize, Deserializer};

/// Error preview maximum length
const ERROR_PREVIEW_LENGTH: usize = 500;

/// Truncate string for error preview (safe handling of multibyte characters)
pub fn truncate_for_preview(s: &str) -> String {
    if s.len() <= ERROR_PREVIEW_LENGTH {
        return s.to_string();
    }
    // Find the last char boundary that does not exceed max_len
    let boundary = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= ERROR_PREVIEW_LENGTH)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..boundary])
}

/// Deserializes an explicit `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key and `null` read the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trims the text and strips one pair of wrapping quotes.
///
/// Only a matching pair is removed (`"..."` or `'...'`), and only one layer:
/// `"'x'"` becomes `'x'`. Whitespace inside the quotes is kept.
pub fn normalize_commit_message(extracted: &str) -> &str {
    let trimmed = extracted.trim();

    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }

    trimmed
}
