//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Workspace root location and repository enumeration
//! - Read-only repository queries
//! - Bounded concurrent execution and run statistics
//! - Configuration constants
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{locate_root, Workspace};

// Queries
pub use super::queries::{
    current_branches, dirty_lines, dirty_repositories, ensure_clean, format_active_branch,
    format_branch_line, non_master_branches, relevant_repositories, user_branches, UserBranches,
};

// Execution
pub use super::executor::{fan_out, JobReport};
pub use super::stats::RunStatistics;

// Configuration
pub use super::config::{
    get_git_concurrency, DEFAULT_BRANCH, DEFAULT_REMOTE, DEFAULT_WORKER_POOL_SIZE,
    NAME_COLUMN_WIDTH,
};

// User-facing messages
pub use super::config::{DIRTY_REPOS_MESSAGE, NO_ROOT_MESSAGE};

// Internal helpers for command modules
pub(crate) use super::progress::{create_footer_progress_bar, print_above, start_footer};
pub(crate) use super::stats::clean_error_message;
