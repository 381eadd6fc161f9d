//! Provider 验证辅助函数
//!
//! 提供通用的 API key / endpoint 校验，减少 provider 实现中的重复代码。

use crate::error::{Result, WizardError};
use crate::llm::GenerationRequest;

/// 从请求中取出 API key
///
/// # 参数
/// - `request` - 当前的生成请求
/// - `label` - 错误信息里使用的服务名（如 `"Gemini"`、`"DeepSeek"`）
pub fn extract_api_key(request: &GenerationRequest, label: &str) -> Result<String> {
    let key = request.api_key.as_deref().map(str::trim).unwrap_or_default();
    validate_api_key(key).map_err(|_| {
        WizardError::Config(format!(
            "API key not found for {} provider '{}'",
            label, request.name
        ))
    })?;
    Ok(key.to_string())
}

/// 验证 API key 是否为空
///
/// # 示例
/// ```
/// use wizard_commit::llm::provider::base::validation::validate_api_key;
///
/// assert!(validate_api_key("sk-test").is_ok());
/// assert!(validate_api_key("").is_err());
/// assert!(validate_api_key("   ").is_err());
/// ```
pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(WizardError::Config("API key is empty".to_string()));
    }
    Ok(())
}

/// 验证 endpoint 为 http(s) URL
pub fn validate_endpoint(endpoint: &str, provider_name: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return Ok(());
    }
    Err(WizardError::Config(format!(
        "Endpoint for provider '{}' must start with http:// or https://, got '{}'",
        provider_name, endpoint
    )))
}
