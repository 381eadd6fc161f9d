//! Command option structures
//!
//! Built once from the parsed CLI and passed to the command flows.

use crate::cli::Cli;
use crate::config::AppConfig;

/// Per-run provider overrides (`--provider`, `--model`, `--url`, `--api-key`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderOverrides<'a> {
    pub provider: Option<&'a str>,
    pub model: Option<&'a str>,
    pub url: Option<&'a str>,
    pub api_key: Option<&'a str>,
}

impl<'a> ProviderOverrides<'a> {
    /// Returns a copy of `config` with the overrides applied.
    ///
    /// `--provider` replaces `llm.default_provider`; the other flags are
    /// written into that provider's entry, creating it if needed.
    pub fn apply(&self, config: &AppConfig) -> AppConfig {
        let mut config = config.clone();

        if let Some(provider) = self.provider {
            config.llm.default_provider = provider.to_string();
        }

        if self.model.is_none() && self.url.is_none() && self.api_key.is_none() {
            return config;
        }

        let entry = config
            .llm
            .providers
            .entry(config.llm.default_provider.clone())
            .or_default();

        if let Some(model) = self.model {
            entry.model = Some(model.to_string());
        }
        if let Some(url) = self.url {
            entry.endpoint = Some(url.to_string());
        }
        if let Some(api_key) = self.api_key {
            entry.api_key = Some(api_key.to_string());
        }

        config
    }
}

/// Commit command options
///
/// # Field description
/// - `commit`: run `git commit` with the generated message (`-a`)
/// - `yes`: skip the confirmation prompt (`-y`)
/// - `overrides`: provider settings for this run only
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions<'a> {
    pub commit: bool,
    pub yes: bool,
    pub overrides: ProviderOverrides<'a>,
}

impl<'a> CommitOptions<'a> {
    /// Constructed from CLI parameters
    pub fn from_cli(cli: &'a Cli) -> Self {
        Self {
            commit: cli.commit,
            yes: cli.yes,
            overrides: ProviderOverrides {
                provider: cli.provider.as_deref(),
                model: cli.model.as_deref(),
                url: cli.url.as_deref(),
                api_key: cli.api_key.as_deref(),
            },
        }
    }
}
