//! Commit message generation: data model, provider trait and pipeline.
//!
//! One invocation runs strictly in sequence:
//!
//! ```text
//! render prompt -> build request -> POST -> extract text -> normalize
//! ```

/// Prompt template rendering.
pub mod prompt;
/// Built-in provider implementations and factory helpers.
pub mod provider;

use async_trait::async_trait;

use crate::config::{ApiStyle, NetworkConfig, ResolvedProvider};
use crate::error::{Result, WizardError};
use crate::llm::provider::base::normalize_commit_message;

/// Unified interface implemented by all providers.
///
/// Every built-in provider gets this through the blanket impl over the
/// internal `ApiBackend` trait in [`provider::base`].
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name used in logs and error messages.
    fn name(&self) -> &str;

    /// Checks the provider has everything it needs (credentials, URL).
    fn validate(&self) -> Result<()>;

    /// Sends a fully rendered prompt and returns the extracted text.
    ///
    /// The returned text is non-empty but not yet normalized.
    async fn send_prompt(&self, prompt: &str) -> Result<String>;
}

/// Everything needed for one generation call.
///
/// Built once per invocation and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Provider name as configured (e.g. `deepseek`).
    pub name: String,
    pub provider: ApiStyle,
    pub model: String,
    pub prompt: String,
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        name: impl Into<String>,
        provider: ApiStyle,
        model: impl Into<String>,
        prompt: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider,
            model: model.into(),
            prompt: prompt.into(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Pairs a resolved provider with a rendered prompt.
    pub fn from_resolved(resolved: ResolvedProvider, prompt: String) -> Self {
        Self {
            name: resolved.name,
            provider: resolved.api_style,
            model: resolved.model,
            prompt,
            endpoint: resolved.endpoint,
            api_key: resolved.api_key,
        }
    }
}

impl std::fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::llm::provider::utils::mask_api_key;
        f.debug_struct("GenerationRequest")
            .field("name", &self.name)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("prompt_len", &self.prompt.len())
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .finish()
    }
}

/// A normalized, non-empty commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Normalizes extracted text. Returns `None` when nothing but whitespace is left.
    pub fn from_extracted(extracted: &str) -> Option<Self> {
        let normalized = normalize_commit_message(extracted);
        if normalized.trim().is_empty() {
            None
        } else {
            Some(Self(normalized.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommitMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Runs one generation: build the provider, send the prompt, normalize.
pub async fn generate_commit_message(
    request: &GenerationRequest,
    network: &NetworkConfig,
) -> Result<CommitMessage> {
    let provider = provider::create_provider(request, network)?;
    complete(provider.as_ref(), &request.prompt).await
}

/// Sends `prompt` through an already built provider and normalizes the reply.
pub async fn complete(provider: &dyn LLMProvider, prompt: &str) -> Result<CommitMessage> {
    let extracted = provider.send_prompt(prompt).await?;
    let message = CommitMessage::from_extracted(&extracted).ok_or_else(|| {
        WizardError::NoExtractableContent {
            provider: provider.name().to_string(),
        }
    })?;
    tracing::debug!("Generated commit message: {}", message);
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl LLMProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn validate(&self) -> Result<()> {
            Ok(())
        }

        async fn send_prompt(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_complete_normalizes() {
        let message = complete(&CannedProvider("  'fix: typo'  "), "p").await.unwrap();
        assert_eq!(message.as_str(), "fix: typo");
    }

    #[tokio::test]
    async fn test_complete_empty_after_normalization_fails() {
        let err = complete(&CannedProvider("\"\""), "p").await.unwrap_err();
        assert!(matches!(err, WizardError::NoExtractableContent { .. }));
    }

    #[tokio::test]
    async fn test_complete_whitespace_inside_quotes_fails() {
        let err = complete(&CannedProvider("'   '"), "p").await.unwrap_err();
        assert!(matches!(err, WizardError::NoExtractableContent { .. }));
    }

    #[tokio::test]
    async fn test_complete_keeps_quoted_whitespace() {
        let message = complete(&CannedProvider("\" refactor core \""), "p").await.unwrap();
        assert_eq!(message.as_str(), " refactor core ");
    }

    #[test]
    fn test_commit_message_display() {
        let message = CommitMessage::from_extracted("\"add feature\"").unwrap();
        assert_eq!(message.to_string(), "add feature");
        assert_eq!(message.into_inner(), "add feature");
    }

    #[test]
    fn test_generation_request_debug_masks_key() {
        let request = GenerationRequest::new(
            "gemini",
            ApiStyle::Gemini,
            "gemini-2.0-flash-lite",
            "prompt",
            "https://example.com",
            Some("AIzaSyD-1234567890abcdef".to_string()),
        );
        let debug = format!("{:?}", request);
        assert!(debug.contains("AIza...cdef"));
        assert!(!debug.contains("1234567890"));
    }
}
