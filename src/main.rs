//! jit: interact with all git repositories within a directory in bulk.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jit::commands::checkout::{handle_co_command, handle_master_command};
use jit::commands::pull::handle_pull_command;
use jit::commands::status::{
    handle_all_command, handle_dirty_command, handle_mine_command, handle_show_command,
};
use jit::core::{get_git_concurrency, Workspace, NO_ROOT_MESSAGE};
use jit::git::GitCli;

/// jit allows you to interact with all git repositories within a directory in bulk.
#[derive(Parser, Debug)]
#[command(name = "jit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of repositories to process concurrently (default: 10)
    #[arg(short, long, global = true, value_name = "N")]
    jobs: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display all current branches.
    All,
    /// Display all branches for all repos.
    Mine,
    /// Display all repos with uncommitted changes.
    Dirty,
    /// Checkout master branch on all repos.
    Master,
    /// Pull from remote origin on all repos.
    Pull,
    /// Show all repos that contain specified branch name.
    Show {
        /// Branch name to look for
        branch: String,
    },
    /// Checkout specified branch in all repos where it exists.
    Co {
        /// Branch name to check out
        branch: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let workspace = Workspace::locate(&cwd, Arc::new(GitCli::new()));
    if workspace.root().is_none() {
        println!("{NO_ROOT_MESSAGE}");
    }

    let jobs = get_git_concurrency(cli.jobs);
    tracing::debug!(jobs, "worker pool size");

    match cli.command {
        Commands::All => handle_all_command(&workspace).await?,
        Commands::Mine => handle_mine_command(&workspace).await?,
        Commands::Dirty => handle_dirty_command(&workspace).await?,
        Commands::Master => handle_master_command(&workspace).await?,
        Commands::Pull => handle_pull_command(&workspace, jobs).await?,
        Commands::Show { branch } => handle_show_command(&workspace, &branch).await?,
        Commands::Co { branch } => handle_co_command(&workspace, &branch, jobs).await?,
    }

    Ok(())
}
