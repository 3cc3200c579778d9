//! Configuration for a treemend resolution run.
//!
//! Everything the run needs is fixed at startup: the two working-copy roots,
//! the supported-extension filter, and the policy knobs for the resolution
//! loop. Loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ConfigError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Configuration for one resolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// The two working-copy roots.
    pub trees: TreesConfig,

    /// Which conflicted files the resolver is allowed to act on.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Resolution behaviour options.
    #[serde(default)]
    pub options: OptionsConfig,
}

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// The reference tree (trunk) and the tree under repair (branch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreesConfig {
    /// Root of the reference working copy (source of the good file content).
    pub trunk_path: PathBuf,

    /// Root of the working copy whose tree conflicts get repaired.
    pub branch_path: PathBuf,
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Supported file-type filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Filename suffixes the resolver acts on (e.g. `".java"`, `".xml"`).
    /// An empty list matches everything.
    #[serde(default)]
    pub supported_extensions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What to do when a conflict filename is absent from the trunk or branch
/// file index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingIndexPolicy {
    /// Abort the whole run on the first missing mapping.
    Abort,
    /// Log an error for that conflict and continue with the next one.
    Skip,
}

impl std::fmt::Display for MissingIndexPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Miscellaneous resolution behaviour options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Policy when a conflict filename has no index entry (default `abort`).
    #[serde(default = "default_missing_index_policy")]
    pub on_missing_index: MissingIndexPolicy,

    /// Name of the SVN binary to invoke (default `svn`).
    #[serde(default = "default_svn_command")]
    pub svn_command: String,
}

fn default_missing_index_policy() -> MissingIndexPolicy {
    MissingIndexPolicy::Abort
}

fn default_svn_command() -> String {
    "svn".into()
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            on_missing_index: default_missing_index_policy(),
            svn_command: default_svn_command(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading & validation
// ---------------------------------------------------------------------------

impl ResolverConfig {
    /// Load a [`ResolverConfig`] from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading resolver configuration");

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: ResolverConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        debug!("resolver configuration parsed successfully");
        Ok(config)
    }

    /// Validate that all required fields are present and sane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trees.trunk_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "trees.trunk_path".into(),
                detail: "trunk path must not be empty".into(),
            });
        }
        if self.trees.branch_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "trees.branch_path".into(),
                detail: "branch path must not be empty".into(),
            });
        }
        if self.trees.trunk_path == self.trees.branch_path {
            return Err(ConfigError::InvalidValue {
                field: "trees.branch_path".into(),
                detail: "trunk and branch must be different working copies".into(),
            });
        }
        if self.options.svn_command.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "options.svn_command".into(),
                detail: "svn command must not be empty".into(),
            });
        }
        for ext in &self.filter.supported_extensions {
            if ext.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "filter.supported_extensions".into(),
                    detail: "extensions must not contain empty strings".into(),
                });
            }
        }
        Ok(())
    }

    /// Convenience: load and validate in one call.
    pub fn load_and_validate<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Generate a default TOML config template string.
    pub fn default_template() -> &'static str {
        r#"# treemend configuration
#
# Resolves "local missing, incoming edit/replace" tree conflicts in the
# branch working copy by copying the trunk file over and marking the
# conflict resolved.
#
# WARNING: do not run against "local missing, incoming delete" conflicts;
# the status output does not let the resolver tell them apart.

[trees]
trunk_path = "/tmp/my-trunk-wc"
branch_path = "/tmp/my-branch1-wc"

[filter]
# Empty list = act on every conflicted file.
supported_extensions = [".java", ".jsp", ".jspx", ".xml", ".css", ".js", ".tagx", ".wsdd"]

[options]
# abort | skip — what to do when a conflict filename has no index entry.
on_missing_index = "abort"
svn_command = "svn"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
[trees]
trunk_path = "/tmp/trunk-wc"
branch_path = "/tmp/branch-wc"

[filter]
supported_extensions = [".java", ".xml"]

[options]
on_missing_index = "skip"
svn_command = "svn"
"#
    }

    #[test]
    fn test_parse_full_config() {
        let config: ResolverConfig = toml::from_str(sample_toml()).expect("failed to parse toml");
        assert_eq!(config.trees.trunk_path, PathBuf::from("/tmp/trunk-wc"));
        assert_eq!(config.trees.branch_path, PathBuf::from("/tmp/branch-wc"));
        assert_eq!(config.filter.supported_extensions.len(), 2);
        assert_eq!(config.options.on_missing_index, MissingIndexPolicy::Skip);
        assert_eq!(config.options.svn_command, "svn");
    }

    #[test]
    fn test_defaults() {
        let minimal = r#"
[trees]
trunk_path = "/tmp/trunk-wc"
branch_path = "/tmp/branch-wc"
"#;
        let config: ResolverConfig = toml::from_str(minimal).unwrap();
        assert!(config.filter.supported_extensions.is_empty());
        assert_eq!(config.options.on_missing_index, MissingIndexPolicy::Abort);
        assert_eq!(config.options.svn_command, "svn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("treemend.toml");
        std::fs::write(&path, sample_toml()).unwrap();

        let config = ResolverConfig::load_from_file(&path).expect("load failed");
        assert_eq!(config.options.on_missing_index, MissingIndexPolicy::Skip);
    }

    #[test]
    fn test_file_not_found() {
        let result = ResolverConfig::load_from_file("/nonexistent/treemend.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_validate_rejects_same_trees() {
        let mut config: ResolverConfig = toml::from_str(sample_toml()).unwrap();
        config.trees.branch_path = config.trees.trunk_path.clone();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "trees.branch_path"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_trunk() {
        let mut config: ResolverConfig = toml::from_str(sample_toml()).unwrap();
        config.trees.trunk_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let mut config: ResolverConfig = toml::from_str(sample_toml()).unwrap();
        config.filter.supported_extensions.push(String::new());
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. })
                if field == "filter.supported_extensions"
        ));
    }

    #[test]
    fn test_default_template_is_valid() {
        let config: ResolverConfig = toml::from_str(ResolverConfig::default_template())
            .expect("default template should be valid TOML");
        config.validate().expect("default template should validate");
        assert_eq!(config.filter.supported_extensions.len(), 8);
    }
}
