//! Read-only listing commands: all, mine, dirty, show

use crate::core::{
    current_branches, dirty_lines, format_active_branch, relevant_repositories, user_branches,
    Workspace,
};
use crate::Result;

/// `jit all`: active branch of every repository
pub async fn handle_all_command(workspace: &Workspace) -> Result<()> {
    for line in current_branches(workspace).await? {
        println!("{line}");
    }
    Ok(())
}

/// `jit mine`: non-master branches of every repository
pub async fn handle_mine_command(workspace: &Workspace) -> Result<()> {
    for overview in user_branches(workspace).await? {
        for line in overview.lines() {
            println!("{line}");
        }
    }
    Ok(())
}

/// `jit dirty`: repositories with uncommitted changes
pub async fn handle_dirty_command(workspace: &Workspace) -> Result<()> {
    for line in dirty_lines(workspace).await? {
        println!("{line}");
    }
    Ok(())
}

/// `jit show <branch>`: repositories containing `branch`
pub async fn handle_show_command(workspace: &Workspace, branch: &str) -> Result<()> {
    let backend = workspace.backend().as_ref();
    for (repo, _) in relevant_repositories(workspace, branch).await? {
        println!("{}", format_active_branch(backend, &repo).await);
    }
    Ok(())
}
