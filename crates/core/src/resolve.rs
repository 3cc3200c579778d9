//! The resolution loop.
//!
//! For each classified conflict: locate the file in the trunk and branch
//! indexes, copy the trunk file over the branch file, then clear the
//! conflict marker through the [`WorkingCopy`] seam. Copy and mark-resolved
//! failures are logged and the loop continues; there is no retry and no
//! rollback of a partial copy.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{error, info};

use crate::classify::ConflictEntry;
use crate::config::MissingIndexPolicy;
use crate::errors::ResolveError;
use crate::index::FileIndex;
use crate::svn::WorkingCopy;

/// Outcome counts for one resolution loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Conflicts successfully copied and marked resolved.
    pub resolved: usize,
    /// Conflicts that hit a copy, mark-resolved, or (under the skip policy)
    /// lookup failure.
    pub failed: usize,
}

/// Executes the copy-then-mark-resolved action per classified conflict.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    on_missing_index: MissingIndexPolicy,
}

impl Resolver {
    pub fn new(on_missing_index: MissingIndexPolicy) -> Self {
        Self { on_missing_index }
    }

    /// Resolve every conflict in `registry`.
    ///
    /// Under [`MissingIndexPolicy::Abort`] the first filename absent from
    /// either index fails the whole run; under `Skip` it is logged and
    /// counted as failed. Iteration order follows the registry and carries
    /// no guarantee of matching status-report order.
    pub async fn resolve_all<C: WorkingCopy>(
        &self,
        registry: &HashMap<String, ConflictEntry>,
        trunk: &FileIndex,
        branch: &FileIndex,
        client: &C,
    ) -> Result<ResolveStats, ResolveError> {
        let start = Instant::now();
        let mut stats = ResolveStats::default();

        for (filename, entry) in registry {
            let trunk_path = match self.lookup(trunk, "trunk", filename, &mut stats)? {
                Some(path) => path,
                None => continue,
            };
            let branch_path = match self.lookup(branch, "branch", filename, &mut stats)? {
                Some(path) => path,
                None => continue,
            };

            match std::fs::copy(trunk_path, branch_path) {
                Ok(bytes) => {
                    info!(
                        filename,
                        from = %trunk_path.display(),
                        to = %branch_path.display(),
                        bytes,
                        "copied trunk file over branch file"
                    );
                }
                Err(e) => {
                    error!(filename, error = %e, "copy failed, leaving conflict unresolved");
                    stats.failed += 1;
                    continue;
                }
            }

            match client.mark_resolved(&entry.path).await {
                Ok(_) => {
                    info!(filename, path = %entry.path.display(), "conflict resolved");
                    stats.resolved += 1;
                }
                Err(e) => {
                    // The file is already copied; the conflict marker stays
                    // set in the working copy. Not auto-corrected.
                    error!(
                        filename,
                        path = %entry.path.display(),
                        error = %e,
                        "mark-resolved failed after copy"
                    );
                    stats.failed += 1;
                }
            }
        }

        info!(
            resolved = stats.resolved,
            failed = stats.failed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "resolution loop complete"
        );
        Ok(stats)
    }

    /// Look up `filename` in one index, applying the missing-index policy.
    ///
    /// `Ok(None)` means "skip this conflict" under the skip policy.
    fn lookup<'a>(
        &self,
        index: &'a FileIndex,
        tree: &'static str,
        filename: &str,
        stats: &mut ResolveStats,
    ) -> Result<Option<&'a std::path::PathBuf>, ResolveError> {
        match index.get(filename) {
            Some(path) => Ok(Some(path)),
            None => match self.on_missing_index {
                MissingIndexPolicy::Abort => Err(ResolveError::LookupFailed {
                    tree,
                    filename: filename.to_string(),
                }),
                MissingIndexPolicy::Skip => {
                    error!(filename, tree, "no index entry for conflict file, skipping");
                    stats.failed += 1;
                    Ok(None)
                }
            },
        }
    }
}
