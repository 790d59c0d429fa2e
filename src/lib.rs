//! # jit
//!
//! `jit` runs git operations in bulk over every repository that sits next to
//! the one you are standing in. It powers the `jit` CLI tool.
//!
//! ## Core Features
//!
//! - **Root Discovery**: Walks up from the working directory to the nearest
//!   repository and treats its parent as the workspace root.
//! - **Status Queries**: Active branches, dirty repositories, non-master
//!   branches and branch lookup across every sibling repository.
//! - **Bulk Checkout and Pull**: Clean-tree guarded mutations, fanned out over
//!   a bounded worker pool.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jit::core::{current_branches, Workspace};
//! use jit::git::GitCli;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> jit::Result<()> {
//!     let workspace = Workspace::locate(".", Arc::new(GitCli::new()));
//!     for line in current_branches(&workspace).await? {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod error;
pub mod git;

pub use error::{Error, Result};
