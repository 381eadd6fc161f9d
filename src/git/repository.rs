use git2::{Diff, DiffFormat, DiffOptions, ErrorCode, Repository, Tree};

use crate::error::Result;
use crate::git::GitOperations;

/// git2-backed [`GitOperations`].
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// 打开当前目录所在的 git 仓库（向上查找）
    pub fn open() -> Result<Self> {
        let repo = Repository::discover(".")?;
        tracing::debug!("Opened git repository at {}", repo.path().display());
        Ok(Self { repo })
    }

    /// HEAD 指向的 tree；还没有任何提交时为 `None`
    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Renders a diff as unified patch text.
    fn render_patch(diff: &Diff<'_>) -> Result<String> {
        let mut patch = Vec::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            // 内容行的 origin（+、-、空格）不在 content 里
            if let origin @ ('+' | '-' | ' ') = line.origin() {
                patch.push(origin as u8);
            }
            patch.extend_from_slice(line.content());
            true
        })?;
        Ok(String::from_utf8_lossy(&patch).into_owned())
    }
}

impl GitOperations for GitRepository {
    fn get_staged_diff(&self) -> Result<String> {
        let index = self.repo.index()?;
        let head_tree = self.head_tree()?;
        let diff = self.repo.diff_tree_to_index(
            head_tree.as_ref(),
            Some(&index),
            Some(&mut DiffOptions::new()),
        )?;
        Self::render_patch(&diff)
    }

    fn get_uncommitted_diff(&self) -> Result<String> {
        let diff = self
            .repo
            .diff_index_to_workdir(None, Some(&mut DiffOptions::new()))?;
        Self::render_patch(&diff)
    }

    fn commit(&self, message: &str) -> Result<()> {
        crate::git::commit::commit_changes(message)
    }
}
