//! Workspace root location and repository enumeration

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::git::{has_git_metadata, GitBackend, Repository};
use crate::{Error, Result};

/// Finds the workspace root for `start`.
///
/// Walks up from `start` (canonicalised when possible) to the nearest
/// directory that is itself a git repository and returns that repository's
/// parent. Fails with [`Error::RootNotFound`] when no ancestor up to the
/// filesystem root is a repository.
pub fn locate_root(start: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start.as_ref();
    let canonical = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());

    canonical
        .ancestors()
        .find(|dir| has_git_metadata(dir))
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::RootNotFound {
            start: start.to_path_buf(),
        })
}

/// The set of sibling repositories jit operates on.
///
/// Built once per invocation. A workspace without a root enumerates to an
/// empty repository list, so every command degrades to a no-op.
#[derive(Clone)]
pub struct Workspace {
    root: Option<PathBuf>,
    backend: Arc<dyn GitBackend>,
}

impl Workspace {
    pub fn new(root: Option<PathBuf>, backend: Arc<dyn GitBackend>) -> Self {
        Self { root, backend }
    }

    /// Locates the root from `start`, logging when there is none
    pub fn locate(start: impl AsRef<Path>, backend: Arc<dyn GitBackend>) -> Self {
        let root = match locate_root(start) {
            Ok(root) => {
                tracing::debug!(root = %root.display(), "located workspace root");
                Some(root)
            }
            Err(e) => {
                tracing::debug!("{e}");
                None
            }
        };
        Self::new(root, backend)
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn backend(&self) -> &Arc<dyn GitBackend> {
        &self.backend
    }

    /// Returns every repository directly beneath the root, sorted by name
    /// (case-insensitive) for stable output
    pub fn repositories(&self) -> Result<Vec<Repository>> {
        let Some(root) = self.root.as_deref() else {
            return Ok(Vec::new());
        };

        let mut repos = Vec::new();
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if path.is_dir() && self.backend.is_repository(&path) {
                repos.push(Repository::new(path));
            }
        }

        repos.sort_by(|a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then_with(|| a.name().cmp(b.name()))
        });
        tracing::debug!(count = repos.len(), "enumerated repositories");

        Ok(repos)
    }
}
