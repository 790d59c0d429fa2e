//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Runs git in `path`, failing with its stderr on a non-zero exit
pub fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a git repository on `master` with user config
pub fn setup_git_repo(path: &Path) -> Result<()> {
    let init_result = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    // Independent of init.defaultBranch
    git(path, &["symbolic-ref", "HEAD", "refs/heads/master"])?;
    configure_user(path)
}

/// Configures a test identity and disables commit signing
pub fn configure_user(path: &Path) -> Result<()> {
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// Creates a test commit in the repository
pub fn create_test_commit(path: &Path, file_name: &str, content: &str, message: &str) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;
    git(path, &["add", file_name])?;
    git(path, &["commit", "-q", "-m", message])?;
    Ok(())
}

/// Creates a local branch at HEAD without switching to it
pub fn create_branch(path: &Path, branch: &str) -> Result<()> {
    git(path, &["branch", branch])?;
    Ok(())
}

pub fn switch_branch(path: &Path, branch: &str) -> Result<()> {
    git(path, &["checkout", "-q", branch])?;
    Ok(())
}

pub fn current_branch(path: &Path) -> Result<String> {
    git(path, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Leaves an untracked file behind
pub fn make_dirty(path: &Path) -> Result<()> {
    std::fs::write(path.join("scratch.txt"), "work in progress")?;
    Ok(())
}

/// Adds a git remote to a repository
pub fn add_git_remote(path: &Path, remote_name: &str, url: &str) -> Result<()> {
    git(path, &["remote", "add", remote_name, url])?;
    Ok(())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
