pub mod commit;
pub mod repository;

use crate::error::{Result, WizardError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Git 操作的统一接口
///
/// 主要实现：[`GitRepository`](repository::GitRepository)。
/// 测试中使用 `mockall` 生成的 `MockGitOperations`。
///
/// # 示例
/// ```no_run
/// use wizard_commit::git::{GitOperations, repository::GitRepository};
///
/// # fn main() -> anyhow::Result<()> {
/// let repo = GitRepository::open()?;
/// let diff = repo.get_staged_diff()?;
/// println!("Staged changes:\n{}", diff);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// 获取 staged changes 的 diff
    ///
    /// 等价于 `git diff --cached`。可能为空字符串。
    fn get_staged_diff(&self) -> Result<String>;

    /// 获取未暂存变更的 diff
    ///
    /// 仅包含 index -> workdir 的变更，等价于 `git diff`。
    fn get_uncommitted_diff(&self) -> Result<String>;

    /// 执行 git commit
    ///
    /// 会触发 pre-commit 和 commit-msg hooks，使用 git config 中的用户信息。
    fn commit(&self, message: &str) -> Result<()>;
}

/// Where a collected diff came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSource {
    Staged,
    Unstaged,
}

/// A non-empty diff ready for prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedDiff {
    pub source: DiffSource,
    pub diff: String,
}

/// Staged changes first, unstaged changes as fallback.
///
/// Returns [`WizardError::NoChanges`] when both are empty.
pub fn collect_diff<G: GitOperations + ?Sized>(git: &G) -> Result<CollectedDiff> {
    let staged = git.get_staged_diff()?;
    if !staged.trim().is_empty() {
        tracing::debug!("Using staged diff ({} bytes)", staged.len());
        return Ok(CollectedDiff {
            source: DiffSource::Staged,
            diff: staged,
        });
    }

    let unstaged = git.get_uncommitted_diff()?;
    if !unstaged.trim().is_empty() {
        tracing::debug!("No staged changes, using unstaged diff ({} bytes)", unstaged.len());
        return Ok(CollectedDiff {
            source: DiffSource::Unstaged,
            diff: unstaged,
        });
    }

    Err(WizardError::NoChanges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_diff_prefers_staged() {
        let mut git = MockGitOperations::new();
        git.expect_get_staged_diff()
            .returning(|| Ok("+staged".to_string()));
        git.expect_get_uncommitted_diff().never();

        let collected = collect_diff(&git).unwrap();
        assert_eq!(collected.source, DiffSource::Staged);
        assert_eq!(collected.diff, "+staged");
    }

    #[test]
    fn test_collect_diff_falls_back_to_unstaged() {
        let mut git = MockGitOperations::new();
        git.expect_get_staged_diff().returning(|| Ok(String::new()));
        git.expect_get_uncommitted_diff()
            .returning(|| Ok("+unstaged".to_string()));

        let collected = collect_diff(&git).unwrap();
        assert_eq!(collected.source, DiffSource::Unstaged);
        assert_eq!(collected.diff, "+unstaged");
    }

    #[test]
    fn test_collect_diff_no_changes() {
        let mut git = MockGitOperations::new();
        git.expect_get_staged_diff().returning(|| Ok("\n".to_string()));
        git.expect_get_uncommitted_diff().returning(|| Ok(String::new()));

        let err = collect_diff(&git).unwrap_err();
        assert!(matches!(err, WizardError::NoChanges));
    }

    #[test]
    fn test_collect_diff_propagates_git_error() {
        let mut git = MockGitOperations::new();
        git.expect_get_staged_diff()
            .returning(|| Err(WizardError::GitCommand("not a repository".to_string())));

        let err = collect_diff(&git).unwrap_err();
        assert!(matches!(err, WizardError::GitCommand(_)));
    }
}
