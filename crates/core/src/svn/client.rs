//! Asynchronous SVN CLI client.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

use super::WorkingCopy;
use crate::errors::SvnError;

/// Asynchronous client for interacting with an SVN working copy via the CLI.
#[derive(Debug, Clone)]
pub struct SvnClient {
    command: String,
}

impl SvnClient {
    /// Create a new SVN client invoking the given binary (usually `"svn"`).
    pub fn new(command: impl Into<String>) -> Self {
        let client = Self {
            command: command.into(),
        };
        info!(command = %client.command, "created SvnClient");
        client
    }

    /// Run one svn subcommand, returning combined stdout+stderr on success.
    ///
    /// The original tool merged the two streams before parsing, so status
    /// output is captured the same way here. Every output line is streamed
    /// to the log.
    async fn run_svn(&self, args: &[&str]) -> Result<String, SvnError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(args)
            .arg("--non-interactive")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        info!(cmd = %format!("{} {}", self.command, args.join(" ")), "running svn command");
        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SvnError::BinaryNotFound(self.command.clone())
            } else {
                SvnError::IoError(e)
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        for line in stdout.lines().chain(stderr.lines()) {
            debug!(line, "svn output");
        }

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            warn!(exit_code, %stderr, "svn command failed");
            return Err(SvnError::CommandFailed { exit_code, stderr });
        }

        let mut combined = stdout;
        combined.push_str(&stderr);
        Ok(combined)
    }
}

impl WorkingCopy for SvnClient {
    #[instrument(skip(self), fields(root = %root.display()))]
    async fn status(&self, root: &Path) -> Result<String, SvnError> {
        let root_str = root.to_string_lossy().to_string();
        self.run_svn(&["status", &root_str]).await
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn mark_resolved(&self, path: &Path) -> Result<String, SvnError> {
        let path_str = path.to_string_lossy().to_string();
        let output = self.run_svn(&["resolved", &path_str]).await?;
        info!(path = %path.display(), "marked conflict resolved");
        Ok(output)
    }
}
