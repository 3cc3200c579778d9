//! Run summary.

use tracing::info;

use crate::resolve::ResolveStats;

/// Counts accumulated over one resolution run. Purely observational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Raw conflict candidates found in the status output.
    pub total_conflicts: usize,
    /// Entries that survived classification (attempted resolutions).
    pub supported_conflicts: usize,
    /// Supported filenames excluded by the duplicate rule.
    pub skipped: Vec<String>,
    /// Conflicts copied and marked resolved.
    pub resolved: usize,
    /// Conflicts that hit a copy/resolve/lookup failure.
    pub failed: usize,
}

impl RunReport {
    pub fn new(
        total_conflicts: usize,
        supported_conflicts: usize,
        skipped: Vec<String>,
        stats: ResolveStats,
    ) -> Self {
        Self {
            total_conflicts,
            supported_conflicts,
            skipped,
            resolved: stats.resolved,
            failed: stats.failed,
        }
    }

    /// Emit the summary as structured log lines.
    pub fn log_summary(&self) {
        info!(
            total_conflicts = self.total_conflicts,
            supported_conflicts = self.supported_conflicts,
            skipped = self.skipped.len(),
            resolved = self.resolved,
            failed = self.failed,
            "run summary"
        );
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Total conflicts:           {}", self.total_conflicts)?;
        writeln!(f, "  Total supported conflicts: {}", self.supported_conflicts)?;
        writeln!(f, "  Resolved:                  {}", self.resolved)?;
        writeln!(f, "  Failed:                    {}", self.failed)?;
        writeln!(
            f,
            "  Skipped (duplicate names): {}",
            self.skipped.len()
        )?;
        write!(f, "  Skipped files: {:?}", self.skipped)
    }
}
