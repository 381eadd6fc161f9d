use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::base::{
    ApiBackend, extract_api_key, null_as_default, validate_api_key, validate_endpoint,
};
use crate::error::{Result, WizardError};
use crate::llm::GenerationRequest;

/// OpenAI-style chat completions provider (DeepSeek and compatible)
///
/// Bearer auth; the prompt is sent as a single user message and the first
/// choice's content is returned.
pub struct OpenAIProvider {
    name: String,
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
pub(crate) struct OpenAIRequest {
    model: String,
    messages: Vec<MessagePayload>,
    stream: bool,
}

#[derive(Serialize)]
struct MessagePayload {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<MessageContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAIProvider {
    pub fn new(request: &GenerationRequest, client: Client) -> Result<Self> {
        let api_key = extract_api_key(request, "DeepSeek")?;

        Ok(Self {
            name: request.name.clone(),
            client,
            api_key,
            endpoint: request.endpoint.clone(),
            model: request.model.clone(),
        })
    }
}

impl ApiBackend for OpenAIProvider {
    type Request = OpenAIRequest;

    fn name(&self) -> &str {
        &self.name
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn build_request(&self, prompt: &str) -> OpenAIRequest {
        tracing::debug!("OpenAI API request: model={}", self.model);
        OpenAIRequest {
            model: self.model.clone(),
            messages: vec![MessagePayload {
                role: "user",
                content: prompt.to_string(),
            }],
            stream: false,
        }
    }

    fn request_url(&self) -> String {
        self.endpoint.clone()
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![("Authorization", format!("Bearer {}", self.api_key))]
    }

    fn extract_message(&self, body: &[u8]) -> Result<String> {
        let response: OpenAIResponse =
            serde_json::from_slice(body).map_err(|e| WizardError::Decoding {
                provider: self.name.clone(),
                message: e.to_string(),
            })?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            WizardError::EmptyUpstreamResponse {
                provider: self.name.clone(),
            }
        })?;

        match choice.finish_reason.as_deref() {
            None | Some("stop") => {}
            Some(reason) => {
                tracing::warn!("{} response finished with reason: {}", self.name, reason);
            }
        }

        choice
            .message
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| WizardError::NoExtractableContent {
                provider: self.name.clone(),
            })
    }

    fn validate(&self) -> Result<()> {
        validate_api_key(&self.api_key)?;
        validate_endpoint(&self.endpoint, &self.name)
    }
}
