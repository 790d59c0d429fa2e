//! Test fixtures: a temporary workspace of sibling repositories

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use jit::core::Workspace;
use jit::git::GitCli;

use super::git::{configure_user, create_test_commit, git, setup_git_repo};

const WORKSPACE_DIR: &str = "workspace";
const UPSTREAM_DIR: &str = "upstreams";

/// A workspace root holding test repositories, removed on drop
///
/// Layout: `<tmp>/workspace/<repo>` for the repositories and
/// `<tmp>/upstreams/<repo>` for the remotes that clones pull from.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base = temp_dir.path().canonicalize()?;
        let root = base.join(WORKSPACE_DIR);
        std::fs::create_dir(&root)?;
        std::fs::create_dir(base.join(UPSTREAM_DIR))?;
        Ok(Self { temp_dir, root })
    }

    /// Canonical workspace root
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repo_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn upstream_path(&self, name: &str) -> PathBuf {
        self.root
            .parent()
            .map(|base| base.join(UPSTREAM_DIR).join(name))
            .unwrap_or_else(|| PathBuf::from(name))
    }

    /// Creates `<root>/<name>` on master with one commit
    pub fn add_repo(&self, name: &str) -> Result<PathBuf> {
        let path = self.repo_path(name);
        std::fs::create_dir(&path)?;
        setup_git_repo(&path)?;
        create_test_commit(&path, "README.md", &format!("# {name}"), "Initial commit")?;
        Ok(path)
    }

    /// Creates an upstream repository and clones it to `<root>/<name>`
    pub fn add_clone(&self, name: &str) -> Result<PathBuf> {
        let upstream = self.upstream_path(name);
        std::fs::create_dir(&upstream)?;
        setup_git_repo(&upstream)?;
        create_test_commit(&upstream, "README.md", &format!("# {name}"), "Initial commit")?;

        let path = self.repo_path(name);
        let source = upstream.to_string_lossy();
        let target = path.to_string_lossy();
        git(&self.root, &["clone", "-q", &*source, &*target])?;
        configure_user(&path)?;
        Ok(path)
    }

    /// Adds a commit to the upstream of a clone made by `add_clone`
    pub fn push_upstream_commit(&self, name: &str, file_name: &str) -> Result<()> {
        create_test_commit(&self.upstream_path(name), file_name, "upstream", "Upstream change")
    }

    /// Creates a plain directory that is not a repository
    pub fn add_plain_dir(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        std::fs::create_dir(&path)?;
        Ok(path)
    }

    /// A workspace located from inside `repo`, the way the CLI locates it
    /// from the working directory
    pub fn locate_from(&self, repo: &str) -> Workspace {
        Workspace::locate(self.repo_path(repo), Arc::new(GitCli::new()))
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(Some(self.root.clone()), Arc::new(GitCli::new()))
    }
}
