use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{
    ApiBackend, extract_api_key, null_as_default, validate_api_key, validate_endpoint,
};
use super::utils::append_api_key;
use crate::error::{Result, WizardError};
use crate::llm::GenerationRequest;

/// Google Gemini API provider
///
/// The model is part of the endpoint path, and the API key travels as the
/// `key` query parameter.
///
/// # Configuration example
/// ```toml
/// [llm]
/// default_provider = "gemini"
///
/// [llm.providers.gemini]
/// api_key = "AIza..."
/// # Optional
/// endpoint = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-lite:generateContent"
/// ```
pub struct GeminiProvider {
    name: String,
    client: Client,
    api_key: String,
    endpoint: String,
}

// ============================================================================
// Request/response structure
// ============================================================================

#[derive(Serialize)]
pub(crate) struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default, deserialize_with = "null_as_default")]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// ============================================================================
// accomplish
// ============================================================================

impl GeminiProvider {
    /// Builds a Gemini provider for one request.
    pub fn new(request: &GenerationRequest, client: Client) -> Result<Self> {
        let api_key = extract_api_key(request, "Gemini")?;

        Ok(Self {
            name: request.name.clone(),
            client,
            api_key,
            endpoint: request.endpoint.clone(),
        })
    }
}

impl ApiBackend for GeminiProvider {
    type Request = GeminiRequest;

    fn name(&self) -> &str {
        &self.name
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }

    fn request_url(&self) -> String {
        append_api_key(&self.endpoint, &self.api_key)
    }

    fn extract_message(&self, body: &[u8]) -> Result<String> {
        let response: GeminiResponse =
            serde_json::from_slice(body).map_err(|e| WizardError::Decoding {
                provider: self.name.clone(),
                message: e.to_string(),
            })?;

        let empty = || WizardError::EmptyUpstreamResponse {
            provider: self.name.clone(),
        };

        let candidate = response.candidates.into_iter().next().ok_or_else(empty)?;

        // SAFETY / RECITATION 等异常结束通常没有 parts
        if let Some(reason) = candidate.finish_reason.as_deref() {
            match reason {
                "STOP" => {}
                "MAX_TOKENS" => {
                    tracing::warn!("{} response truncated (MAX_TOKENS)", self.name);
                }
                _ => {
                    tracing::warn!("{} response finished with reason: {}", self.name, reason);
                }
            }
        }

        let part = candidate
            .content
            .and_then(|c| c.parts.into_iter().next())
            .ok_or_else(empty)?;

        part.text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| WizardError::NoExtractableContent {
                provider: self.name.clone(),
            })
    }

    fn validate(&self) -> Result<()> {
        validate_api_key(&self.api_key)?;
        validate_endpoint(&self.endpoint, &self.name)
    }
}
