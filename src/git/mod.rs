pub(crate) mod backend;
pub(crate) mod operations;
pub(crate) mod status;

// Public API - curated exports only
pub mod api;

pub use api::*;
