//! Error types for jit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for jit operations
#[derive(Error, Debug)]
pub enum Error {
    /// No ancestor of the start directory is a git repository
    #[error("no git repository found above {}", start.display())]
    RootNotFound { start: PathBuf },

    /// A clean-tree precondition failed; holds the formatted listing lines
    #[error("{} repositories have uncommitted changes", repositories.len())]
    DirtyRepositories { repositories: Vec<String> },

    /// A git invocation failed for one repository
    #[error("{repo}: {message}")]
    Git { repo: String, message: String },

    /// HEAD does not point at a branch
    #[error("{repo}: detached HEAD")]
    DetachedHead { repo: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
