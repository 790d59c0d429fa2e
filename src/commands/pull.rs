//! Pull from `origin` across repositories
//!
//! Best effort: a failed pull is reported for its repository and never
//! stops the others. The clean-tree precondition still aborts everything.

use std::sync::Arc;

use super::{failure_detail, print_dirty_repositories, Reporter};
use crate::core::{ensure_clean, fan_out, JobReport, Workspace, DEFAULT_REMOTE};
use crate::git::{GitBackend, Repository, Status};
use crate::{Error, Result};

/// Pulls one repository from `origin`
pub async fn pull_one(backend: &dyn GitBackend, repo: &Repository) -> JobReport {
    match backend.pull(repo, DEFAULT_REMOTE).await {
        Ok(()) => JobReport::success(repo.name(), Status::Pulled, format!("Pulled {}", repo.name())),
        Err(e) => {
            tracing::debug!(repo = repo.name(), "pull failed: {e}");
            JobReport::failure(
                repo.name(),
                Status::PullError,
                format!("Could not pull {}", repo.name()),
                failure_detail(&e),
            )
        }
    }
}

/// Pulls every repository in `repos` with at most `limit` in flight
pub async fn pull_repositories<D>(
    workspace: &Workspace,
    repos: Vec<Repository>,
    limit: usize,
    on_done: D,
) -> Vec<JobReport>
where
    D: FnMut(&JobReport),
{
    let backend = Arc::clone(workspace.backend());
    fan_out(
        repos,
        limit,
        |repo| {
            let backend = Arc::clone(&backend);
            async move { pull_one(backend.as_ref(), &repo).await }
        },
        on_done,
    )
    .await
}

/// Pulls every repository, unless one of them is dirty.
///
/// `on_start` receives the number of repositories once the clean-tree
/// precondition has passed; `on_done` sees each report as it completes.
pub async fn pull_all<S, D>(
    workspace: &Workspace,
    limit: usize,
    on_start: S,
    on_done: D,
) -> Result<Vec<JobReport>>
where
    S: FnOnce(usize),
    D: FnMut(&JobReport),
{
    ensure_clean(workspace).await?;
    let repos = workspace.repositories()?;
    on_start(repos.len());
    Ok(pull_repositories(workspace, repos, limit, on_done).await)
}

/// `jit pull`
pub async fn handle_pull_command(workspace: &Workspace, jobs: usize) -> Result<()> {
    let reporter = Reporter::new("Pulling");
    let outcome = pull_all(
        workspace,
        jobs,
        |total| reporter.start(total),
        |report| reporter.report(report),
    )
    .await;

    match outcome {
        Ok(_) => {
            reporter.finish(Status::Pulled);
            Ok(())
        }
        Err(Error::DirtyRepositories { repositories }) => {
            reporter.abandon();
            print_dirty_repositories(&repositories);
            Ok(())
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}
