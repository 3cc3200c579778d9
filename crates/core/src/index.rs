//! File index over a working-copy tree.
//!
//! A [`FileIndex`] maps base filenames to absolute paths for every regular
//! file under one tree root. It is built once per run and read-only after
//! construction. If a tree contains two files with the same base name in
//! different subdirectories, the later-visited one silently overwrites the
//! earlier — an accepted limitation, not a disambiguation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::errors::IndexError;

/// Mapping from base filename to absolute path for one tree.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    entries: HashMap<String, PathBuf>,
}

impl FileIndex {
    /// Walk `root` recursively and index every regular file found.
    ///
    /// Any traversal error aborts the build; a partial index is never
    /// returned. Symlinks are not followed.
    pub fn build(root: &Path) -> Result<Self, IndexError> {
        if !root.is_dir() {
            return Err(IndexError::RootNotADirectory(root.display().to_string()));
        }

        let start = Instant::now();
        let mut entries = HashMap::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| IndexError::WalkFailed {
                root: root.display().to_string(),
                source: e,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let abs = path
                .canonicalize()
                .map_err(|e| IndexError::CanonicalizeFailed {
                    path: path.display().to_string(),
                    source: e,
                })?;
            let filename = abs
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if let Some(previous) = entries.insert(filename.clone(), abs) {
                debug!(
                    filename,
                    previous = %previous.display(),
                    "duplicate base name in tree, keeping later entry"
                );
            }
        }

        info!(
            root = %root.display(),
            files = entries.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "tree walk completed"
        );

        Ok(Self { entries })
    }

    /// Look up the absolute path for a base filename.
    pub fn get(&self, filename: &str) -> Option<&PathBuf> {
        self.entries.get(filename)
    }

    /// Number of files indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
