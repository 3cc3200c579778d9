//! treemend core library.
//!
//! Automates resolution of SVN "local missing, incoming edit/replace" tree
//! conflicts: indexes the trunk and branch working copies, parses
//! `svn status` output for conflicted paths, copies the trunk file over the
//! branch file, and marks the conflict resolved.

pub mod classify;
pub mod config;
pub mod engine;
pub mod errors;
pub mod index;
pub mod report;
pub mod resolve;
pub mod svn;

// Re-exports for convenience.
pub use config::ResolverConfig;
pub use engine::ResolveEngine;
pub use index::FileIndex;
pub use report::RunReport;
pub use svn::{SvnClient, WorkingCopy};
