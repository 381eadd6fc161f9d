//! Provider utility functions
//!
//! Contains common functions such as query-string auth and key masking

use reqwest::Url;

/// Query parameter carrying the Gemini API key.
const KEY_PARAM: &str = "key";

/// Adds `key=<api_key>` to the query string unless a `key` parameter is already present.
///
/// The key is form-encoded, so `&`, `#` or `+` in it cannot break the query.
/// A URL that does not parse is returned unchanged; sending to it fails anyway.
///
/// # Example
/// ```
/// use wizard_commit::llm::provider::utils::append_api_key;
///
/// assert_eq!(append_api_key("https://host/path", "K"), "https://host/path?key=K");
/// assert_eq!(append_api_key("https://host/path?a=1", "K"), "https://host/path?a=1&key=K");
/// assert_eq!(append_api_key("https://host/path?key=X", "K"), "https://host/path?key=X");
/// ```
pub fn append_api_key(url: &str, api_key: &str) -> String {
    let Ok(mut parsed) = Url::parse(url.trim_end_matches('&')) else {
        tracing::warn!("Endpoint is not a valid URL, API key not added");
        return url.to_string();
    };

    if parsed.query_pairs().any(|(k, _)| k == KEY_PARAM) {
        return url.to_string();
    }

    parsed.query_pairs_mut().append_pair(KEY_PARAM, api_key);
    parsed.into()
}

/// Masks the value of a `key` query parameter so URLs can be logged.
///
/// # Example
/// ```
/// use wizard_commit::llm::provider::utils::redact_api_key;
///
/// assert_eq!(
///     redact_api_key("https://host/p?a=1&key=AIzaSyD-1234567890abcdef"),
///     "https://host/p?a=1&key=AIza...cdef"
/// );
/// ```
pub fn redact_api_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) if k == KEY_PARAM => format!("{}={}", k, mask_api_key(v)),
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, pairs.join("&"))
}

/// Mask API key to prevent log leaks
///
/// # rule
/// - length > 8: display first 4 characters + `...` + last 4 characters
/// - length <= 8: display `****`
///
/// # Example
/// ```
/// use wizard_commit::llm::provider::utils::mask_api_key;
///
/// assert_eq!(mask_api_key("sk-ant-api03-abcdefgh"), "sk-a...efgh");
/// assert_eq!(mask_api_key("short"), "****");
/// assert_eq!(mask_api_key(""), "****");
/// ```
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}
