//! Top-level application configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::llm::LLMConfig;
use super::network::NetworkConfig;

/// Application configuration.
///
/// Effective configuration is merged from multiple sources (low to high):
/// 1. Rust defaults (`Default` + `serde(default)`)
/// 2. User-level config file (platform-specific config directory)
/// 3. Project-level config (`./.wizard-commit.toml`)
/// 4. `WIZARD_COMMIT__*` environment variables
///
/// Command-line flags are applied on top by the commit command.
///
/// # Configuration File Locations
/// - Linux: `~/.config/wizard-commit/config.toml`
/// - macOS: `~/Library/Application Support/wizard-commit/config.toml`
/// - Windows: `%APPDATA%\wizard-commit\config\config.toml`
///
/// # Example
/// ```toml
/// [llm]
/// default_provider = "deepseek"
///
/// [llm.providers.deepseek]
/// api_key = "sk-..."
///
/// [commit]
/// confirm_before_commit = true
///
/// [ui]
/// colored = true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Provider selection, prompt and provider settings.
    #[serde(default)]
    pub llm: LLMConfig,

    /// Commit behavior.
    #[serde(default)]
    pub commit: CommitConfig,

    /// Terminal UI behavior.
    #[serde(default)]
    pub ui: UIConfig,

    /// HTTP timeouts.
    #[serde(default)]
    pub network: NetworkConfig,
}

impl AppConfig {
    /// Validates configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.llm.resolve_provider(&self.llm.default_provider)?;

        for (name, provider) in &self.llm.providers {
            provider.validate(name)?;
        }
        self.network.validate()?;
        Ok(())
    }
}

/// Commit configuration.
///
/// # Example
/// ```toml
/// [commit]
/// confirm_before_commit = false
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommitConfig {
    /// Ask before running `git commit` (overridden by `--yes`).
    #[serde(default = "default_true")]
    pub confirm_before_commit: bool,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            confirm_before_commit: true,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UIConfig {
    /// Colored terminal output.
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

fn default_true() -> bool {
    true
}
