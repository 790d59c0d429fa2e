//! Repository handles and the capability set used to drive them

use async_trait::async_trait;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::config::UNKNOWN_REPO_NAME;
use crate::Result;

/// One discovered repository.
///
/// Holds only identity. Branches, dirty state and the active branch are read
/// through a [`GitBackend`] every time they are asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    path: PathBuf,
    name: String,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(UNKNOWN_REPO_NAME)
            .to_string();
        Self { path, name }
    }

    /// Working directory of the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Basename of the working directory
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Operations jit needs from a git implementation.
///
/// `GitCli` is the production adapter; tests substitute their own to observe
/// scheduling without touching real repositories.
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// True when `path` holds repository metadata
    fn is_repository(&self, path: &Path) -> bool {
        has_git_metadata(path)
    }

    /// Names of all local branches
    async fn list_branches(&self, repo: &Repository) -> Result<Vec<String>>;

    /// Currently checked-out branch
    async fn active_branch(&self, repo: &Repository) -> Result<String>;

    /// True when there are staged, unstaged or untracked changes
    async fn is_dirty(&self, repo: &Repository) -> Result<bool>;

    async fn checkout(&self, repo: &Repository, branch: &str) -> Result<()>;

    /// Pull the current branch from `remote`
    async fn pull(&self, repo: &Repository, remote: &str) -> Result<()>;
}

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first 5 lines
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => BufReader::new(file)
            .lines()
            .take(5)
            .map_while(std::result::Result::ok)
            .any(|line| line.trim_start().starts_with("gitdir:")),
        Err(_) => false,
    }
}

/// True when `path` contains a `.git` directory or a `.git` gitdir file
pub fn has_git_metadata(path: &Path) -> bool {
    let dot_git = path.join(".git");
    if dot_git.is_dir() {
        true
    } else if dot_git.is_file() {
        is_git_file(&dot_git)
    } else {
        false
    }
}
