//! Git command execution and the `git` executable backend

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use super::backend::{GitBackend, Repository};
use crate::core::clean_error_message;
use crate::{Error, Result};

// Git command arguments
const GIT_LIST_BRANCHES_ARGS: &[&str] = &["for-each-ref", "--format=%(refname)", "refs/heads/"];
const GIT_ACTIVE_BRANCH_ARGS: &[&str] = &["symbolic-ref", "--quiet", "--short", "HEAD"];
const GIT_STATUS_PORCELAIN_ARGS: &[&str] = &["status", "--porcelain"];
const GIT_CHECKOUT_ARGS: &[&str] = &["checkout", "--quiet"];
const GIT_PULL_ARGS: &[&str] = &["pull", "--quiet"];

const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Runs a git command in the specified directory
/// Returns (success, stdout, stderr)
///
/// Terminal prompts are disabled so a pull that needs credentials fails
/// instead of blocking a worker.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<(bool, String, String)> {
    tracing::debug!(path = %path.display(), ?args, "running git");

    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .await?;

    Ok((
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
        String::from_utf8_lossy(&output.stderr).trim().to_string(),
    ))
}

/// Runs a git command and turns a non-zero exit into [`Error::Git`]
async fn run_git_checked(repo: &Repository, args: &[&str]) -> Result<String> {
    let (success, stdout, stderr) = run_git(repo.path(), args).await?;
    if success {
        Ok(stdout)
    } else {
        Err(Error::Git {
            repo: repo.name().to_string(),
            message: clean_error_message(&stderr),
        })
    }
}

/// [`GitBackend`] that shells out to the `git` executable
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GitBackend for GitCli {
    async fn list_branches(&self, repo: &Repository) -> Result<Vec<String>> {
        let output = run_git_checked(repo, GIT_LIST_BRANCHES_ARGS).await?;
        Ok(output
            .lines()
            .filter_map(|line| line.trim().strip_prefix(LOCAL_BRANCH_PREFIX))
            .map(str::to_string)
            .collect())
    }

    async fn active_branch(&self, repo: &Repository) -> Result<String> {
        // symbolic-ref exits 1 without output when HEAD is detached, and
        // still answers on an unborn branch
        match run_git(repo.path(), GIT_ACTIVE_BRANCH_ARGS).await? {
            (true, branch, _) if !branch.is_empty() => Ok(branch),
            (_, _, stderr) if stderr.is_empty() => Err(Error::DetachedHead {
                repo: repo.name().to_string(),
            }),
            (_, _, stderr) => Err(Error::Git {
                repo: repo.name().to_string(),
                message: clean_error_message(&stderr),
            }),
        }
    }

    async fn is_dirty(&self, repo: &Repository) -> Result<bool> {
        let output = run_git_checked(repo, GIT_STATUS_PORCELAIN_ARGS).await?;
        Ok(!output.is_empty())
    }

    async fn checkout(&self, repo: &Repository, branch: &str) -> Result<()> {
        let mut args = Vec::from(GIT_CHECKOUT_ARGS);
        args.push(branch);
        // Trailing "--" keeps git from reading the name as a path
        args.push("--");
        run_git_checked(repo, &args).await.map(|_| ())
    }

    async fn pull(&self, repo: &Repository, remote: &str) -> Result<()> {
        let mut args = Vec::from(GIT_PULL_ARGS);
        args.push(remote);
        run_git_checked(repo, &args).await.map(|_| ())
    }
}
