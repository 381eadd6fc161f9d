use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{ApiBackend, validate_endpoint};
use super::text_scan::scan_message_field;
use crate::error::{Result, WizardError};
use crate::llm::GenerationRequest;

/// Ollama `/api/generate` provider
///
/// Local deployment, no auth. The reply is decoded as JSON first; when that
/// yields nothing usable, a text scan and finally the raw body are used.
///
/// # Configuration example
/// ```toml
/// [llm.providers.ollama]
/// endpoint = "http://localhost:11434/api/generate" # Optional
/// model = "gemma3:1b"
/// ```
pub struct OllamaProvider {
    name: String,
    client: Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
pub(crate) struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl OllamaProvider {
    pub fn new(request: &GenerationRequest, client: Client) -> Result<Self> {
        // Ollama 本地部署，无需 API key
        Ok(Self {
            name: request.name.clone(),
            client,
            endpoint: request.endpoint.clone(),
            model: request.model.clone(),
        })
    }
}

impl ApiBackend for OllamaProvider {
    type Request = OllamaRequest;

    fn name(&self) -> &str {
        &self.name
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn build_request(&self, prompt: &str) -> OllamaRequest {
        tracing::debug!("Ollama API request: model={}", self.model);
        OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        }
    }

    fn request_url(&self) -> String {
        self.endpoint.clone()
    }

    fn extract_message(&self, body: &[u8]) -> Result<String> {
        match serde_json::from_slice::<OllamaResponse>(body) {
            Ok(parsed) => {
                if let Some(text) = non_blank(parsed.response).or_else(|| non_blank(parsed.content))
                {
                    return Ok(text);
                }
                tracing::warn!(
                    "{} response has no 'response' or 'content' text, scanning raw body",
                    self.name
                );
            }
            Err(e) => {
                tracing::warn!(
                    "{} response is not the expected JSON ({}), scanning raw body",
                    self.name,
                    e
                );
            }
        }

        let raw = String::from_utf8_lossy(body);
        if let Some(text) = scan_message_field(&raw) {
            return Ok(text);
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WizardError::NoExtractableContent {
                provider: self.name.clone(),
            });
        }

        tracing::warn!("{} response used verbatim", self.name);
        Ok(trimmed.to_string())
    }

    fn validate(&self) -> Result<()> {
        validate_endpoint(&self.endpoint, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    use crate::config::ApiStyle;
    use crate::llm::LLMProvider;
    use crate::llm::provider::test_utils::{test_client, test_request};

    fn provider(endpoint: String) -> OllamaProvider {
        OllamaProvider::new(
            &test_request(ApiStyle::Ollama, endpoint, None),
            test_client(),
        )
        .unwrap()
    }

    fn extract(body: &str) -> Result<String> {
        provider("http://localhost:11434/api/generate".to_string()).extract_message(body.as_bytes())
    }

    #[test]
    fn test_extract_response_field() {
        assert_eq!(extract(r#"{"response":"fix bug"}"#).unwrap(), "fix bug");
    }

    #[test]
    fn test_extract_content_when_response_empty() {
        assert_eq!(
            extract(r#"{"response":"","content":"add feature"}"#).unwrap(),
            "add feature"
        );
    }

    #[test]
    fn test_extract_response_takes_priority() {
        assert_eq!(
            extract(r#"{"response":"first","content":"second"}"#).unwrap(),
            "first"
        );
    }

    #[test]
    fn test_extract_whitespace_response_counts_as_empty() {
        assert_eq!(
            extract(r#"{"response":"  \n","content":"use content"}"#).unwrap(),
            "use content"
        );
    }

    #[test]
    fn test_extract_full_ollama_reply() {
        let body = r#"{"model":"gemma3:1b","created_at":"2025-01-01T00:00:00Z","response":"docs: update readme","done":true,"done_reason":"stop"}"#;
        assert_eq!(extract(body).unwrap(), "docs: update readme");
    }

    #[test]
    fn test_extract_scans_unrecognized_shape() {
        assert_eq!(
            extract(r#"{"foo":"response: update docs"}"#).unwrap(),
            "update docs"
        );
    }

    #[test]
    fn test_extract_non_json_uses_raw_body() {
        assert_eq!(extract("  not json at all\n").unwrap(), "not json at all");
    }

    #[test]
    fn test_extract_empty_body_fails() {
        let err = extract("  ").unwrap_err();
        assert!(matches!(err, WizardError::NoExtractableContent { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        assert!(ApiBackend::validate(&provider("localhost:11434".to_string())).is_err());
    }

    #[tokio::test]
    async fn test_ollama_request_body_and_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "gemma3:1b",
                "prompt": "Summarize: +fn main() {}",
                "stream": false
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response":"Hello from Ollama","done":true}"#)
            .create_async()
            .await;

        let provider = provider(format!("{}/api/generate", server.url()));
        let result = provider.send_prompt("Summarize: +fn main() {}").await.unwrap();

        assert_eq!(result, "Hello from Ollama");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ollama_api_error_500() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .with_status(500)
            .with_body("model not loaded")
            .create_async()
            .await;

        let provider = provider(format!("{}/api/generate", server.url()));
        let err = provider.send_prompt("hi").await.unwrap_err();

        match err {
            WizardError::UpstreamStatus { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "model not loaded");
            }
            other => panic!("Expected UpstreamStatus, got: {:?}", other),
        }
        mock.assert_async().await;
    }
}
