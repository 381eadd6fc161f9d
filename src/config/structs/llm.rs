//! LLM provider configuration structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};
use crate::llm::prompt::DEFAULT_PROMPT_TEMPLATE;

/// LLM API backend type.
///
/// Determines which request builder, transport auth and response extractor
/// are used. If [`ProviderConfig::api_style`] is `None`, the style is inferred
/// from the provider name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    /// Ollama `/api/generate` (no auth).
    Ollama,
    /// OpenAI-style chat completions (DeepSeek and compatible), bearer auth.
    #[serde(rename = "openai", alias = "deepseek")]
    OpenAI,
    /// Google Gemini `generateContent`, key passed as a query parameter.
    Gemini,
}

impl std::fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiStyle::Ollama => write!(f, "ollama"),
            ApiStyle::OpenAI => write!(f, "openai"),
            ApiStyle::Gemini => write!(f, "gemini"),
        }
    }
}

impl std::str::FromStr for ApiStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(ApiStyle::Ollama),
            "openai" | "deepseek" => Ok(ApiStyle::OpenAI),
            "gemini" => Ok(ApiStyle::Gemini),
            _ => Err(format!("Unknown API style: '{}'", s)),
        }
    }
}

impl ApiStyle {
    /// Returns the default endpoint URL for this API style.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ApiStyle::Ollama => "http://localhost:11434/api/generate",
            ApiStyle::OpenAI => "https://api.deepseek.com/chat/completions",
            ApiStyle::Gemini => {
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-lite:generateContent"
            }
        }
    }

    /// Default endpoint for `model`.
    ///
    /// Gemini carries the model in the URL path; the others send it in the body.
    pub fn endpoint_for_model(&self, model: &str) -> String {
        match self {
            ApiStyle::Gemini => format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                model
            ),
            _ => self.default_endpoint().to_string(),
        }
    }

    /// Returns the default model name for this API style.
    pub fn default_model(&self) -> &'static str {
        match self {
            ApiStyle::Ollama => "gemma3:1b",
            ApiStyle::OpenAI => "deepseek-chat",
            ApiStyle::Gemini => "gemini-2.0-flash-lite",
        }
    }

    /// Whether requests must carry an API key.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, ApiStyle::Ollama)
    }
}

/// Provider configuration.
///
/// Settings for one entry under `[llm.providers.<name>]`. Every field is
/// optional; unset or empty values fall back to the [`ApiStyle`] defaults.
///
/// # Example
/// ```toml
/// [llm.providers.deepseek]
/// api_key = "sk-..."
/// model = "deepseek-chat"
///
/// [llm.providers.work-ollama]
/// api_style = "ollama"
/// endpoint = "http://gpu-box:11434/api/generate"
/// model = "qwen2.5-coder:7b"
/// ```
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API style used to select the backend implementation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_style: Option<ApiStyle>,

    /// Full request URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key. Required for `openai` and `gemini` styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::llm::provider::utils::mask_api_key;
        let masked_key = self.api_key.as_deref().map(mask_api_key);
        f.debug_struct("ProviderConfig")
            .field("api_style", &self.api_style)
            .field("endpoint", &self.endpoint)
            .field("api_key", &masked_key)
            .field("model", &self.model)
            .finish()
    }
}

impl ProviderConfig {
    /// Validates provider configuration.
    pub fn validate(&self, name: &str) -> Result<()> {
        if let Some(ref key) = self.api_key
            && key.trim().is_empty()
        {
            return Err(WizardError::Config(format!(
                "Provider '{}': api_key is empty",
                name
            )));
        }
        if let Some(ref endpoint) = self.endpoint
            && !endpoint.trim().is_empty()
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(WizardError::Config(format!(
                "Provider '{}': endpoint '{}' must start with http:// or https://",
                name, endpoint
            )));
        }
        Ok(())
    }
}

/// A provider entry with every default filled in.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub name: String,
    pub api_style: ApiStyle,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl std::fmt::Debug for ResolvedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::llm::provider::utils::mask_api_key;
        f.debug_struct("ResolvedProvider")
            .field("name", &self.name)
            .field("api_style", &self.api_style)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("model", &self.model)
            .finish()
    }
}

/// LLM configuration.
///
/// # Fields
/// - `default_provider`: provider name, either a key under `[llm.providers.<name>]`
///   or one of the built-ins (`ollama`, `deepseek`, `gemini`)
/// - `prompt_template`: prompt with a `{diff}` insertion point
/// - `max_diff_size`: maximum diff size in bytes sent to the model (default: 100 KiB)
/// - `providers`: per-provider settings
///
/// # Example
/// ```toml
/// [llm]
/// default_provider = "gemini"
///
/// [llm.providers.gemini]
/// api_key = "AIza..."
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LLMConfig {
    /// Provider used when `--provider` is not given.
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Prompt template; `{diff}` marks where the diff is inserted.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,

    /// Maximum diff size in bytes sent to the model.
    #[serde(default = "default_max_diff_size")]
    pub max_diff_size: usize,

    /// Provider settings keyed by provider name.
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            prompt_template: default_prompt_template(),
            max_diff_size: default_max_diff_size(),
            providers: BTreeMap::new(),
        }
    }
}

impl LLMConfig {
    /// Resolves a provider by name, filling unset fields from its API style.
    ///
    /// Names without a `[llm.providers.<name>]` entry are accepted when they
    /// are themselves a valid API style (`ollama`, `deepseek`, `openai`, `gemini`).
    pub fn resolve_provider(&self, name: &str) -> Result<ResolvedProvider> {
        let entry = self.providers.get(name);

        let api_style = match entry.and_then(|p| p.api_style) {
            Some(style) => style,
            None => name.parse::<ApiStyle>().map_err(|_| {
                WizardError::Config(format!(
                    "Unknown provider '{}': add [llm.providers.{}] with api_style = \"ollama\" | \"openai\" | \"gemini\"",
                    name, name
                ))
            })?,
        };

        let non_empty = |value: Option<&String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let model = non_empty(entry.and_then(|p| p.model.as_ref()))
            .unwrap_or_else(|| api_style.default_model().to_string());
        let endpoint = non_empty(entry.and_then(|p| p.endpoint.as_ref()))
            .unwrap_or_else(|| api_style.endpoint_for_model(&model));
        let api_key = non_empty(entry.and_then(|p| p.api_key.as_ref()));

        Ok(ResolvedProvider {
            name: name.to_string(),
            api_style,
            endpoint,
            api_key,
            model,
        })
    }
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

fn default_max_diff_size() -> usize {
    100 * 1024 // 100KB
}
