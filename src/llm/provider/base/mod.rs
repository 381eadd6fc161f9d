//! Provider 公共抽象和辅助函数
//!
//! 模块结构：
//! - `transport` - HTTP 请求发送（无重试）
//! - `response` - 提取结果的规范化与日志预览
//! - `validation` - API key / endpoint 校验
//! - `ApiBackend` trait - 各 provider 只需实现独有部分，通用流程由 blanket impl 提供

pub mod response;
pub mod transport;
pub mod validation;

pub use response::*;
pub use transport::{create_http_client, send_request};
pub use validation::{extract_api_key, validate_api_key, validate_endpoint};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::{Result, WizardError};
use crate::llm::LLMProvider;

/// 内部 trait：每个 provider 只需实现自己独有的部分
///
/// `build_request` / `request_url` + `auth_headers` / `extract_message` are the
/// three per-provider capabilities; the blanket impl below wires them into
/// [`LLMProvider::send_prompt`].
pub(crate) trait ApiBackend: Send + Sync {
    /// Provider-native request body.
    type Request: Serialize + Send;

    /// Provider name
    fn name(&self) -> &str;

    fn client(&self) -> &Client;

    /// Builds the request body for a rendered prompt.
    fn build_request(&self, prompt: &str) -> Self::Request;

    /// Final request URL, including any query-string auth.
    fn request_url(&self) -> String;

    /// Extra headers (auth) besides `Content-Type`.
    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Pulls the generated text out of the raw response body.
    ///
    /// Must return a non-empty string or an error.
    fn extract_message(&self, body: &[u8]) -> Result<String>;

    /// 验证配置
    fn validate(&self) -> Result<()>;
}

/// Serializes a request body, mapping failures to [`WizardError::Encoding`].
pub(crate) fn encode_request<Req: Serialize>(request: &Req, provider_name: &str) -> Result<Vec<u8>> {
    serde_json::to_vec(request).map_err(|source| WizardError::Encoding {
        provider: provider_name.to_string(),
        source,
    })
}

#[async_trait]
impl<T: ApiBackend> LLMProvider for T {
    fn name(&self) -> &str {
        ApiBackend::name(self)
    }

    fn validate(&self) -> Result<()> {
        ApiBackend::validate(self)
    }

    async fn send_prompt(&self, prompt: &str) -> Result<String> {
        let name = ApiBackend::name(self);
        let body = encode_request(&self.build_request(prompt), name)?;
        tracing::debug!(
            "{} request: prompt_len={}, body_len={}",
            name,
            prompt.len(),
            body.len()
        );

        let raw = send_request(
            self.client(),
            &self.request_url(),
            &self.auth_headers(),
            body,
            name,
        )
        .await?;

        self.extract_message(&raw)
    }
}
