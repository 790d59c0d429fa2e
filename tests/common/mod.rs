//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod git;

pub use self::fixtures::TestWorkspace;
pub use self::git::{
    create_branch, current_branch, is_git_available, make_dirty, switch_branch,
};
