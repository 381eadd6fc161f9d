//! HTTP 请求发送
//!
//! One POST per invocation. Failures are reported as-is; nothing is retried.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use super::response::truncate_for_preview;
use crate::config::NetworkConfig;
use crate::error::{Result, WizardError};
use crate::llm::provider::utils::redact_api_key;

/// Builds the HTTP client for one invocation.
///
/// Timeouts are only set when configured; otherwise the client default applies.
pub fn create_http_client(network_config: &NetworkConfig) -> Result<Client> {
    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(secs) = network_config.request_timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = network_config.connect_timeout {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| WizardError::Config(format!("Failed to create HTTP client: {}", e)))
}

fn transport_error(provider_name: &str, e: reqwest::Error) -> WizardError {
    // 错误信息中的 URL 可能带有 key= 参数
    let e = e.without_url();
    let message = if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else if e.is_body() || e.is_decode() {
        format!("failed to read response body: {}", e)
    } else {
        e.to_string()
    };

    tracing::debug!("{} API request failed: {}", provider_name, message);

    WizardError::Transport {
        provider: provider_name.to_string(),
        message,
    }
}

/// Sends a JSON body as POST and returns the raw response body.
///
/// The body is read to the end on every path, including non-2xx statuses,
/// which are returned as [`WizardError::UpstreamStatus`] with the body text.
///
/// # Arguments
/// * `client` - HTTP 客户端
/// * `endpoint` - full request URL
/// * `headers` - 额外的请求头
/// * `body` - serialized JSON
/// * `provider_name` - Provider 名称（用于日志和错误信息）
pub async fn send_request(
    client: &Client,
    endpoint: &str,
    headers: &[(&'static str, String)],
    body: Vec<u8>,
    provider_name: &str,
) -> Result<Vec<u8>> {
    let mut req = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json");

    for (key, value) in headers {
        req = req.header(*key, value.as_str());
    }

    tracing::debug!("Sending request to: {}", redact_api_key(endpoint));

    let response = req
        .body(body)
        .send()
        .await
        .map_err(|e| transport_error(provider_name, e))?;

    let status = response.status();
    let raw = response
        .bytes()
        .await
        .map_err(|e| transport_error(provider_name, e))?;

    let text = String::from_utf8_lossy(&raw);
    tracing::debug!("{} API response status: {}", provider_name, status);
    tracing::debug!(
        "{} API response body: {}",
        provider_name,
        truncate_for_preview(&text)
    );

    if !status.is_success() {
        return Err(WizardError::UpstreamStatus {
            provider: provider_name.to_string(),
            status: status.as_u16(),
            body: text.into_owned(),
        });
    }

    Ok(raw.to_vec())
}
