//! Read-only repository queries
//!
//! Everything here runs sequentially. A failure in one repository is logged
//! with its name and rendered in place; it never aborts the whole listing.

use crate::core::config::{
    DEFAULT_BRANCH, DETACHED_HEAD_DISPLAY, MINE_BRANCH_WIDTH, NAME_COLUMN_WIDTH, UNKNOWN_BRANCH,
};
use crate::core::discovery::Workspace;
use crate::git::{GitBackend, Repository};
use crate::{Error, Result};

/// Pads `name` to the name column and appends `branch`
pub fn format_branch_line(name: &str, branch: &str) -> String {
    format!("{name:<width$}{branch}", width = NAME_COLUMN_WIDTH)
}

/// `<name-padded><active-branch>` for one repository
pub async fn format_active_branch(backend: &dyn GitBackend, repo: &Repository) -> String {
    let branch = match backend.active_branch(repo).await {
        Ok(branch) => branch,
        Err(Error::DetachedHead { .. }) => DETACHED_HEAD_DISPLAY.to_string(),
        Err(e) => {
            tracing::warn!(repo = repo.name(), "could not read active branch: {e}");
            UNKNOWN_BRANCH.to_string()
        }
    };
    format_branch_line(repo.name(), &branch)
}

/// Active branch line for every repository
pub async fn current_branches(workspace: &Workspace) -> Result<Vec<String>> {
    let backend = workspace.backend().as_ref();
    let mut lines = Vec::new();
    for repo in workspace.repositories()? {
        lines.push(format_active_branch(backend, &repo).await);
    }
    Ok(lines)
}

fn without_master(branches: &[String]) -> Vec<String> {
    branches
        .iter()
        .filter(|branch| *branch != DEFAULT_BRANCH)
        .cloned()
        .collect()
}

/// Local branches of `repo` other than the literal `master`
pub async fn non_master_branches(backend: &dyn GitBackend, repo: &Repository) -> Result<Vec<String>> {
    Ok(without_master(&backend.list_branches(repo).await?))
}

/// Branch overview of one repository for `jit mine`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBranches {
    pub repo: String,
    /// Number of local branches, master included
    pub branch_count: usize,
    pub branches: Vec<String>,
}

impl UserBranches {
    /// The name is only listed for repositories with more than one branch;
    /// non-master branches are listed regardless, left-aligned to
    /// `MINE_BRANCH_WIDTH` columns.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.branches.len() + 1);
        if self.branch_count > 1 {
            lines.push(self.repo.clone());
        }
        lines.extend(
            self.branches
                .iter()
                .map(|branch| format!("{branch:<width$}", width = MINE_BRANCH_WIDTH)),
        );
        lines
    }
}

/// Non-master branches per repository
pub async fn user_branches(workspace: &Workspace) -> Result<Vec<UserBranches>> {
    let backend = workspace.backend().as_ref();
    let mut overview = Vec::new();
    for repo in workspace.repositories()? {
        let all = match backend.list_branches(&repo).await {
            Ok(all) => all,
            Err(e) => {
                tracing::warn!(repo = repo.name(), "could not list branches: {e}");
                continue;
            }
        };
        overview.push(UserBranches {
            repo: repo.name().to_string(),
            branch_count: all.len(),
            branches: without_master(&all),
        });
    }
    Ok(overview)
}

/// Repositories with uncommitted changes.
///
/// With `strict`, a repository whose status cannot be read counts as dirty;
/// otherwise it is logged and left out.
pub async fn dirty_repositories(workspace: &Workspace, strict: bool) -> Result<Vec<Repository>> {
    let backend = workspace.backend().as_ref();
    let mut dirty = Vec::new();
    for repo in workspace.repositories()? {
        match backend.is_dirty(&repo).await {
            Ok(true) => dirty.push(repo),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(repo = repo.name(), "could not read status: {e}");
                if strict {
                    dirty.push(repo);
                }
            }
        }
    }
    Ok(dirty)
}

/// Active branch lines for every dirty repository
pub async fn dirty_lines(workspace: &Workspace) -> Result<Vec<String>> {
    let backend = workspace.backend().as_ref();
    let mut lines = Vec::new();
    for repo in dirty_repositories(workspace, false).await? {
        lines.push(format_active_branch(backend, &repo).await);
    }
    Ok(lines)
}

/// Fails with [`Error::DirtyRepositories`] unless every repository is clean
pub async fn ensure_clean(workspace: &Workspace) -> Result<()> {
    let backend = workspace.backend().as_ref();
    let dirty = dirty_repositories(workspace, true).await?;
    if dirty.is_empty() {
        return Ok(());
    }

    let mut repositories = Vec::with_capacity(dirty.len());
    for repo in &dirty {
        repositories.push(format_active_branch(backend, repo).await);
    }
    Err(Error::DirtyRepositories { repositories })
}

/// Repositories that have a local branch named exactly `branch`, each paired
/// with the branch name
pub async fn relevant_repositories(
    workspace: &Workspace,
    branch: &str,
) -> Result<Vec<(Repository, String)>> {
    let backend = workspace.backend().as_ref();
    let mut relevant = Vec::new();
    for repo in workspace.repositories()? {
        match backend.list_branches(&repo).await {
            Ok(branches) if branches.iter().any(|b| b == branch) => {
                relevant.push((repo, branch.to_string()));
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(repo = repo.name(), "could not list branches: {e}"),
        }
    }
    Ok(relevant)
}
