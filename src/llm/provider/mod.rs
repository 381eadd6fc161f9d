pub mod base;
pub mod gemini;
pub mod ollama;
pub mod openai;
pub mod text_scan;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use crate::config::{ApiStyle, NetworkConfig};
use crate::error::Result;
use crate::llm::{GenerationRequest, LLMProvider};

pub(crate) use base::create_http_client;

/// 根据请求创建具体的 Provider 实现
///
/// The HTTP client is built here, once per invocation, from `network`.
/// The provider is validated before it is returned.
pub fn create_provider(
    request: &GenerationRequest,
    network: &NetworkConfig,
) -> Result<Box<dyn LLMProvider>> {
    let client = create_http_client(network)?;

    let provider: Box<dyn LLMProvider> = match request.provider {
        ApiStyle::Ollama => Box::new(ollama::OllamaProvider::new(request, client)?),
        ApiStyle::OpenAI => Box::new(openai::OpenAIProvider::new(request, client)?),
        ApiStyle::Gemini => Box::new(gemini::GeminiProvider::new(request, client)?),
    };

    provider.validate()?;
    tracing::debug!(
        "Created {} provider '{}' (model={})",
        request.provider,
        request.name,
        request.model
    );
    Ok(provider)
}
