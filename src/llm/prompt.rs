//! Prompt template rendering.

/// Insertion point for the diff inside a prompt template.
pub const DIFF_PLACEHOLDER: &str = "{diff}";

/// printf-style marker accepted when a template has no `{diff}`.
const LEGACY_PLACEHOLDER: &str = "%s";

/// Built-in commit prompt.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"Generate a concise and descriptive git commit message based on the following changes.
Follow best practices for git commit messages: use imperative mood, keep it under 50 characters for the first line,
and add more details in a body if necessary.

Respond ONLY with the commit message, no other text, explanation, or quotes.
Just the commit message that would be used with 'git commit -m'.

Changes:
{diff}"#;

/// Substitutes `diff` into `template` at its single insertion point.
///
/// Only the first `{diff}` is replaced. Templates written for the old
/// printf-style format may use `%s` instead. A template with neither marker
/// gets the diff appended after a blank line.
///
/// # Example
/// ```
/// use wizard_commit::llm::prompt::render_prompt;
///
/// assert_eq!(render_prompt("Changes:\n{diff}", "+a"), "Changes:\n+a");
/// assert_eq!(render_prompt("Summarize", "+a"), "Summarize\n\n+a");
/// ```
pub fn render_prompt(template: &str, diff: &str) -> String {
    if template.contains(DIFF_PLACEHOLDER) {
        return template.replacen(DIFF_PLACEHOLDER, diff, 1);
    }
    if template.contains(LEGACY_PLACEHOLDER) {
        return template.replacen(LEGACY_PLACEHOLDER, diff, 1);
    }
    format!("{}\n\n{}", template.trim_end(), diff)
}

/// Cuts `diff` to at most `max_bytes` (on a char boundary) and marks the cut.
pub fn truncate_diff(diff: &str, max_bytes: usize) -> String {
    if diff.len() <= max_bytes {
        return diff.to_string();
    }

    let boundary = diff
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max_bytes)
        .last()
        .unwrap_or(0);

    tracing::debug!(
        "Diff truncated from {} to {} bytes",
        diff.len(),
        boundary
    );

    format!(
        "{}\n\n[... diff truncated, {} of {} bytes shown ...]",
        &diff[..boundary],
        boundary,
        diff.len()
    )
}
