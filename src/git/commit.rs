use std::process::Command;

use crate::error::{Result, WizardError};

/// Execute git commit
///
/// Use git CLI instead of git2 to support:
/// - GPG signature (commit.gpgsign, user.signingkey)
/// - Git hooks (pre-commit, commit-msg, etc.)
///
/// # Arguments
/// * `message` - Commit message, passed as a single argument
pub fn commit_changes(message: &str) -> Result<()> {
    tracing::debug!("Running git commit ({} bytes message)", message.len());

    let output = Command::new("git")
        .args(["commit", "-m", message])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let error_msg = if stderr.trim().is_empty() {
            // "nothing added to commit" goes to stdout
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(WizardError::GitCommand(error_msg));
    }

    Ok(())
}
