//! Branch checkout across repositories
//!
//! `master` runs sequentially behind a clean-tree precondition; `co` runs
//! concurrently over the repositories that have the requested branch.

use std::sync::Arc;

use super::{failure_detail, print_dirty_repositories, Reporter};
use crate::core::{
    ensure_clean, fan_out, format_active_branch, relevant_repositories, JobReport, Workspace,
    DEFAULT_BRANCH,
};
use crate::git::{GitBackend, Repository, Status};
use crate::{Error, Result};

/// Checks out `branch` in one repository and reports the resulting branch
pub async fn checkout_one(backend: &dyn GitBackend, repo: &Repository, branch: &str) -> JobReport {
    match backend.checkout(repo, branch).await {
        Ok(()) => JobReport::success(
            repo.name(),
            Status::CheckedOut,
            format_active_branch(backend, repo).await,
        ),
        Err(e) => {
            tracing::debug!(repo = repo.name(), branch, "checkout failed: {e}");
            JobReport::failure(
                repo.name(),
                Status::CheckoutError,
                format!("Could not checkout {} in {}", branch, repo.name()),
                failure_detail(&e),
            )
        }
    }
}

/// Checks out `master` in every repository, one after another.
///
/// Nothing is touched when any repository is dirty: the call fails with
/// [`Error::DirtyRepositories`] listing them. A repository without `master`
/// gets a failure report and the rest still run.
pub async fn all_to_master<D>(workspace: &Workspace, mut on_done: D) -> Result<Vec<JobReport>>
where
    D: FnMut(&JobReport),
{
    ensure_clean(workspace).await?;

    let backend = workspace.backend().as_ref();
    let mut reports = Vec::new();
    for repo in workspace.repositories()? {
        let report = checkout_one(backend, &repo, DEFAULT_BRANCH).await;
        on_done(&report);
        reports.push(report);
    }
    Ok(reports)
}

/// Checks out each (repository, branch) pair with at most `limit` in flight
pub async fn checkout_repositories<D>(
    workspace: &Workspace,
    pairs: Vec<(Repository, String)>,
    limit: usize,
    on_done: D,
) -> Vec<JobReport>
where
    D: FnMut(&JobReport),
{
    let backend = Arc::clone(workspace.backend());
    fan_out(
        pairs,
        limit,
        |(repo, branch)| {
            let backend = Arc::clone(&backend);
            async move { checkout_one(backend.as_ref(), &repo, &branch).await }
        },
        on_done,
    )
    .await
}

/// Checks out `branch` wherever it exists. Repositories without it are
/// skipped silently.
///
/// `on_start` receives the number of repositories that have the branch
/// before any checkout begins.
pub async fn checkout_relevant<S, D>(
    workspace: &Workspace,
    branch: &str,
    limit: usize,
    on_start: S,
    on_done: D,
) -> Result<Vec<JobReport>>
where
    S: FnOnce(usize),
    D: FnMut(&JobReport),
{
    let pairs = relevant_repositories(workspace, branch).await?;
    if pairs.is_empty() {
        tracing::debug!(branch, "no repository has this branch");
    }
    on_start(pairs.len());
    Ok(checkout_repositories(workspace, pairs, limit, on_done).await)
}

/// `jit master`
pub async fn handle_master_command(workspace: &Workspace) -> Result<()> {
    match all_to_master(workspace, |report| println!("{}", report.line)).await {
        Ok(_) => Ok(()),
        Err(Error::DirtyRepositories { repositories }) => {
            print_dirty_repositories(&repositories);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// `jit co <branch>`
pub async fn handle_co_command(workspace: &Workspace, branch: &str, jobs: usize) -> Result<()> {
    let reporter = Reporter::new(&format!("Checking out {branch}"));
    let outcome = checkout_relevant(
        workspace,
        branch,
        jobs,
        |total| reporter.start(total),
        |report| reporter.report(report),
    )
    .await;

    match outcome {
        Ok(_) => {
            reporter.finish(Status::CheckedOut);
            Ok(())
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}
