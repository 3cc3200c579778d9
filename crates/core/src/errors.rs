//! Error types for the treemend core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`CoreError`] enum unifies them all for callers that want a
//! single error type.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Svn(#[from] SvnError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// SVN errors
// ---------------------------------------------------------------------------

/// Errors from SVN CLI operations.
#[derive(Debug, Error)]
pub enum SvnError {
    /// The `svn` binary was not found on `$PATH`.
    #[error("svn binary not found: {0}")]
    BinaryNotFound(String),

    /// An `svn` command exited with a non-zero status.
    #[error("svn command failed (exit {exit_code}): {stderr}")]
    CommandFailed {
        exit_code: i32,
        stderr: String,
    },

    /// Generic I/O wrapper.
    #[error("svn I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Index errors
// ---------------------------------------------------------------------------

/// Errors from building a file index over a working-copy tree.
///
/// Any traversal failure is fatal for the run; a partial index is never
/// usable for resolution.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The tree root does not exist or is not a directory.
    #[error("index root is not a directory: '{0}'")]
    RootNotADirectory(String),

    /// The recursive walk hit an I/O error.
    #[error("tree walk failed under '{root}': {source}")]
    WalkFailed {
        root: String,
        #[source]
        source: walkdir::Error,
    },

    /// A path could not be canonicalized to an absolute path.
    #[error("failed to resolve absolute path for '{path}': {source}")]
    CanonicalizeFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Resolve errors
// ---------------------------------------------------------------------------

/// Errors from the conflict resolution loop.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A conflict filename was absent from the trunk or branch index.
    #[error("no {tree} index entry for conflict file '{filename}'")]
    LookupFailed {
        tree: &'static str,
        filename: String,
    },

    /// Underlying SVN error while invoking the status tool.
    #[error("resolve SVN error: {0}")]
    SvnError(#[from] SvnError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parse error.
    #[error("configuration parse error: {0}")]
    ParseError(String),

    /// A config value is invalid.
    #[error("invalid configuration value for '{field}': {detail}")]
    InvalidValue {
        field: String,
        detail: String,
    },

    /// Generic I/O error reading the config file.
    #[error("configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = SvnError::BinaryNotFound("svn".into());
        assert_eq!(err.to_string(), "svn binary not found: svn");

        let err = SvnError::CommandFailed {
            exit_code: 1,
            stderr: "E155007".into(),
        };
        assert!(err.to_string().contains("exit 1"));

        let err = ResolveError::LookupFailed {
            tree: "trunk",
            filename: "Main.java".into(),
        };
        assert_eq!(
            err.to_string(),
            "no trunk index entry for conflict file 'Main.java'"
        );

        let err = ConfigError::InvalidValue {
            field: "trees.trunk_path".into(),
            detail: "must not be empty".into(),
        };
        assert!(err.to_string().contains("trees.trunk_path"));
    }

    #[test]
    fn test_core_error_from_subsystem() {
        let svn_err = SvnError::BinaryNotFound("svn".into());
        let core_err: CoreError = svn_err.into();
        assert!(matches!(core_err, CoreError::Svn(_)));

        let idx_err = IndexError::RootNotADirectory("/nowhere".into());
        let core_err: CoreError = idx_err.into();
        assert!(matches!(core_err, CoreError::Index(_)));
    }
}
