//! Configuration constants and settings

use tokio::sync::Semaphore;

// Worker pool size for concurrent checkout and pull
pub const DEFAULT_WORKER_POOL_SIZE: usize = 10;

// Largest pool the executor's semaphore can hold
pub const MAX_WORKER_POOL_SIZE: usize = Semaphore::MAX_PERMITS;

/// Determines the worker pool size for concurrent git operations
///
/// `--jobs N` wins when given (clamped to `1..=MAX_WORKER_POOL_SIZE`),
/// otherwise the default pool of 10.
pub fn get_git_concurrency(jobs: Option<usize>) -> usize {
    match jobs {
        Some(n) => n.clamp(1, MAX_WORKER_POOL_SIZE),
        None => DEFAULT_WORKER_POOL_SIZE,
    }
}

// Branch and remote names. "master" is literal: repositories whose default
// branch is "main" are not special-cased.
pub const DEFAULT_BRANCH: &str = "master";
pub const DEFAULT_REMOTE: &str = "origin";

// Display formatting constants
pub const NAME_COLUMN_WIDTH: usize = 35;
pub const MINE_BRANCH_WIDTH: usize = 5;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 60;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 57;
pub const UNKNOWN_REPO_NAME: &str = "unknown";
pub const UNKNOWN_BRANCH: &str = "<unknown>";
pub const DETACHED_HEAD_DISPLAY: &str = "(detached HEAD)";

// UI Constants
pub const NO_ROOT_MESSAGE: &str = "Could not find a root directory.";
pub const DIRTY_REPOS_MESSAGE: &str = "Please commit or stash your changes in the following repos.";
pub const PROGRESS_TEMPLATE: &str = "{spinner} {msg} {pos}/{len}";
pub const PROGRESS_TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";
