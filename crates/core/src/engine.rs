//! The resolution engine.
//!
//! Orchestrates one strictly sequential run: index the trunk tree, index the
//! branch tree, fetch and parse the branch's status output, classify the raw
//! conflicts, run the resolution loop, and return the summary. Each phase
//! owns its output and hands it to the next; nothing is shared or persisted
//! between runs.

use tracing::{info, warn};

use crate::classify::classify;
use crate::config::ResolverConfig;
use crate::errors::CoreError;
use crate::index::FileIndex;
use crate::report::RunReport;
use crate::resolve::Resolver;
use crate::svn::{parser, WorkingCopy};

/// Drives a full tree-conflict resolution run against one branch working copy.
pub struct ResolveEngine<C: WorkingCopy> {
    config: ResolverConfig,
    client: C,
}

impl<C: WorkingCopy> ResolveEngine<C> {
    pub fn new(config: ResolverConfig, client: C) -> Self {
        Self { config, client }
    }

    /// The underlying working-copy collaborator.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run one resolution pass and return the summary report.
    ///
    /// Indexing failures and status-tool invocation failures abort the run.
    /// Per-conflict copy/resolve failures are logged and counted, subject to
    /// the configured missing-index policy.
    pub async fn run(&self) -> Result<RunReport, CoreError> {
        info!(
            trunk = %self.config.trees.trunk_path.display(),
            branch = %self.config.trees.branch_path.display(),
            "starting tree-conflict resolution run"
        );

        let trunk_index = FileIndex::build(&self.config.trees.trunk_path)?;
        let branch_index = FileIndex::build(&self.config.trees.branch_path)?;

        let status_output = self
            .client
            .status(&self.config.trees.branch_path)
            .await
            .map_err(CoreError::Svn)?;
        let raw_conflicts = parser::parse_status(&status_output);

        if raw_conflicts.is_empty() {
            info!("no tree conflicts found, nothing to resolve");
        }

        let classification = classify(&raw_conflicts, &self.config.filter.supported_extensions);
        for skipped in &classification.skipped {
            warn!(filename = %skipped, "excluded from resolution (duplicate filename)");
        }

        let resolver = Resolver::new(self.config.options.on_missing_index);
        let stats = resolver
            .resolve_all(
                &classification.registry,
                &trunk_index,
                &branch_index,
                &self.client,
            )
            .await?;

        let report = RunReport::new(
            raw_conflicts.len(),
            classification.registry.len(),
            classification.skipped,
            stats,
        );
        report.log_summary();
        Ok(report)
    }
}
