//! SVN integration: the CLI client, the status-output parser, and the
//! narrow [`WorkingCopy`] seam the resolution engine consumes.

pub mod client;
pub mod parser;

use std::path::Path;

use crate::errors::SvnError;

pub use client::SvnClient;

/// The narrow interface to the version-control collaborator.
///
/// Only two operations are consumed: fetching status text for a tree root and
/// clearing the conflict marker on one path. Keeping the collaborator behind
/// this seam makes the engine testable without a real `svn` binary.
pub trait WorkingCopy {
    /// Run the status tool against `root` and return its combined output.
    fn status(
        &self,
        root: &Path,
    ) -> impl std::future::Future<Output = Result<String, SvnError>> + Send;

    /// Clear the conflict marker for `path`, returning the tool's output.
    fn mark_resolved(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, SvnError>> + Send;
}
