use std::path::Path;

use crate::commands::options::CommitOptions;
use crate::config::{self, AppConfig};
use crate::error::{Result, WizardError};
use crate::ui;

/// 保存当前生效的配置（`--save-config`）
///
/// CLI overrides are merged in first, then the result is validated and
/// written to the user config file.
pub fn run(options: &CommitOptions<'_>, config: &AppConfig) -> Result<()> {
    let path = config::get_config_path().ok_or_else(|| {
        WizardError::Config("Could not determine the user config directory".to_string())
    })?;
    let saved = save_to(options, config, &path)?;
    ui::success(
        &format!(
            "Configuration saved to {} (provider: {})",
            path.display(),
            saved.llm.default_provider
        ),
        config.ui.colored,
    );
    Ok(())
}

/// Applies the overrides and writes the result to `path`.
pub fn save_to(options: &CommitOptions<'_>, config: &AppConfig, path: &Path) -> Result<AppConfig> {
    let effective = options.overrides.apply(config);
    effective.validate()?;
    config::save_config(&effective, path)?;
    Ok(effective)
}
