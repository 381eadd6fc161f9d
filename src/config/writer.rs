//! Persists the effective configuration (`--save-config`).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::structs::AppConfig;
use crate::error::Result;

/// Writes `config` as TOML to `path`, creating parent directories.
///
/// API keys are included, so on Unix the file is restricted to the owner.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    write_private(path, content.as_bytes())?;

    tracing::debug!("Configuration written to {}", path.display());
    Ok(())
}

/// Writes `content` to `path`, owner read/write only on Unix.
///
/// A new file is created with mode 0600. An existing file is narrowed to
/// 0600 before it is truncated.
fn write_private(path: &Path, content: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        if path.exists() {
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
    }

    let mut file = options.truncate(true).open(path)?;
    file.write_all(content)?;
    Ok(())
}
