//! Public API for git access.
//!
//! This module provides the stable public API for git-related functionality:
//! - Repository handles and the [`GitBackend`] capability set
//! - The `git` executable adapter, [`GitCli`]
//! - Per-repository operation status
//!
//! ## Example: Reading the active branch
//!
//! ```rust,no_run
//! use jit::git::{GitBackend, GitCli, Repository};
//!
//! async fn show(path: &std::path::Path) -> jit::Result<()> {
//!     let repo = Repository::new(path);
//!     let branch = GitCli::new().active_branch(&repo).await?;
//!     println!("{} is on {}", repo.name(), branch);
//!     Ok(())
//! }
//! ```

pub use super::backend::{has_git_metadata, GitBackend, Repository};
pub use super::operations::{run_git, GitCli};
pub use super::status::Status;
