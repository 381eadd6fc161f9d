//! Test utilities for provider tests
//!
//! Provides common request/client builders to reduce duplication
//! across provider test suites.

use reqwest::Client;

use crate::config::{ApiStyle, NetworkConfig};
use crate::llm::GenerationRequest;

/// 在测试中安装 rustls crypto provider
///
/// reqwest 0.13 + rustls-no-provider 需要手动安装 crypto provider，
/// 生产代码在 main.rs 中完成，测试需要单独调用。
/// 多次调用是安全的（install_default 失败时忽略即可）。
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// HTTP client with default (unset) timeouts
pub fn test_client() -> Client {
    ensure_crypto_provider();
    super::create_http_client(&NetworkConfig::default()).unwrap()
}

/// Create a `GenerationRequest` for testing
///
/// # Parameters
/// - `style` - Provider kind; its lowercase name is used as the provider name
/// - `endpoint` - Mock server URL (e.g., from `mockito::Server`) plus path
/// - `api_key` - Optional API key
pub fn test_request(style: ApiStyle, endpoint: String, api_key: Option<&str>) -> GenerationRequest {
    GenerationRequest::new(
        style.to_string(),
        style,
        style.default_model(),
        "Summarize: +fn main() {}",
        endpoint,
        api_key.map(str::to_string),
    )
}
