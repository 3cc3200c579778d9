//! Conflict classification.
//!
//! Narrows the raw conflict-path candidates from the status parser down to
//! the set the resolver may act on: the filename must carry a supported
//! suffix, and the base filename must be unique across all candidates.
//! Filenames are the lookup key into the per-tree file indexes, so two
//! conflicts sharing a base name cannot be resolved safely — both are
//! excluded and the name is recorded as skipped ("uniqueness or exclusion",
//! never an arbitrary pick).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use tracing::{debug, info, warn};

/// One conflicted path under the branch tree, keyed by its base filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    /// Base filename (no directory component).
    pub filename: String,
    /// Path as reported by the status tool.
    pub path: PathBuf,
}

/// The classified conflicts: at most one entry per base filename.
#[derive(Debug, Default)]
pub struct Classification {
    /// Filename → conflict entry, for every uniquely-named supported conflict.
    pub registry: HashMap<String, ConflictEntry>,
    /// Supported filenames excluded because they appeared more than once.
    pub skipped: Vec<String>,
}

/// Whether `filename` ends with one of the supported suffixes.
///
/// An empty configured list matches everything.
fn has_supported_suffix(filename: &str, supported: &[String]) -> bool {
    supported.is_empty() || supported.iter().any(|suffix| filename.ends_with(suffix.as_str()))
}

/// Reduce raw conflict-path candidates to a [`Classification`].
///
/// Unsupported suffixes are discarded silently; a repeated base filename
/// removes the earlier entry and excludes every later occurrence, so a name
/// with any duplicate never reaches the resolver.
pub fn classify(raw_conflicts: &[String], supported: &[String]) -> Classification {
    let mut registry: HashMap<String, ConflictEntry> = HashMap::new();
    let mut skipped = Vec::new();
    let mut excluded: HashSet<String> = HashSet::new();

    for raw in raw_conflicts {
        let path = PathBuf::from(raw);
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        if !has_supported_suffix(&filename, supported) {
            debug!(filename, "unsupported file type, discarding conflict");
            continue;
        }

        if excluded.contains(&filename) {
            debug!(filename, "filename already excluded as duplicate");
            continue;
        }

        if registry.remove(&filename).is_some() {
            warn!(filename, "duplicate filename among conflicts, skipping resolution for it");
            skipped.push(filename.clone());
            excluded.insert(filename);
        } else {
            registry.insert(filename.clone(), ConflictEntry { filename, path });
        }
    }

    info!(
        raw = raw_conflicts.len(),
        supported = registry.len(),
        skipped = skipped.len(),
        "conflict classification complete"
    );

    Classification { registry, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn raw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_supported_conflict_is_registered() {
        let result = classify(&raw(&["foo/bar/A.java"]), &exts(&[".java", ".xml"]));
        assert_eq!(result.registry.len(), 1);
        assert!(result.skipped.is_empty());

        let entry = &result.registry["A.java"];
        assert_eq!(entry.filename, "A.java");
        assert_eq!(entry.path, PathBuf::from("foo/bar/A.java"));
    }

    #[test]
    fn test_unsupported_extension_is_discarded_silently() {
        let result = classify(&raw(&["foo/baz/C.txt"]), &exts(&[".java"]));
        assert!(result.registry.is_empty());
        // Not a duplicate skip, so not recorded.
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_empty_extension_list_matches_everything() {
        let result = classify(&raw(&["a/readme.txt", "b/notes.md"]), &[]);
        assert_eq!(result.registry.len(), 2);
    }

    #[test]
    fn test_duplicate_filename_excludes_both() {
        let result = classify(&raw(&["dir1/X.java", "dir2/X.java"]), &exts(&[".java"]));
        assert!(result.registry.is_empty());
        assert_eq!(result.skipped, vec!["X.java"]);
    }

    #[test]
    fn test_triplicate_filename_stays_excluded() {
        // A third occurrence must not sneak back into the registry after the
        // first pair got removed.
        let result = classify(
            &raw(&["dir1/X.java", "dir2/X.java", "dir3/X.java"]),
            &exts(&[".java"]),
        );
        assert!(result.registry.is_empty());
        assert_eq!(result.skipped, vec!["X.java"]);
    }

    #[test]
    fn test_duplicates_do_not_affect_other_entries() {
        let result = classify(
            &raw(&["dir1/X.java", "a/B.xml", "dir2/X.java"]),
            &exts(&[".java", ".xml"]),
        );
        assert_eq!(result.registry.len(), 1);
        assert!(result.registry.contains_key("B.xml"));
        assert_eq!(result.skipped, vec!["X.java"]);
    }

    #[test]
    fn test_mixed_scenario_from_status_output() {
        // One supported conflict, one unsupported extension.
        let result = classify(
            &raw(&["foo/bar/A.java", "foo/baz/C.txt"]),
            &exts(&[".java", ".jsp", ".jspx", ".xml", ".css", ".js", ".tagx", ".wsdd"]),
        );
        assert_eq!(result.registry.len(), 1);
        assert!(result.registry.contains_key("A.java"));
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_suffix_match_is_end_anchored() {
        let result = classify(&raw(&["foo/A.java.bak"]), &exts(&[".java"]));
        assert!(result.registry.is_empty());
    }
}
