//! Eligibility Detector - decides whether a directory is a Go project worth
//! structural analysis.
//!
//! A manifest (`go.mod` / `go.work`) at the root always qualifies. Without one,
//! the directory qualifies once [`MIN_SOURCE_FILES`] non-test `.go` files are
//! found outside hidden and vendor directories.

use crate::language::{is_go_source_file, is_skipped_dir, MANIFEST_FILES};
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Non-test Go files required when no manifest is present
pub const MIN_SOURCE_FILES: usize = 3;

/// Whether `root` should be handled by the Go construct engine
///
/// Never fails: an unreadable or missing root is simply not eligible.
pub fn is_eligible(root: &Path) -> bool {
    if !root.is_dir() {
        debug!("Not eligible: {} is not a directory", root.display());
        return false;
    }

    if let Some(manifest) = MANIFEST_FILES
        .iter()
        .find(|manifest| root.join(manifest).is_file())
    {
        debug!("Eligible: found {} in {}", manifest, root.display());
        return true;
    }

    let count = count_source_files(root, MIN_SOURCE_FILES);
    debug!(
        "Found {} Go source files in {} (threshold {})",
        count,
        root.display(),
        MIN_SOURCE_FILES
    );
    count >= MIN_SOURCE_FILES
}

/// Count non-test Go files under `root`, stopping once `limit` is reached
pub(crate) fn count_source_files(root: &Path, limit: usize) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_entry(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_go_source_file(entry.path()))
        .take(limit)
        .count()
}

/// Hidden or vendor directory below the root
pub(crate) fn is_skipped_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(is_skipped_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_manifest_makes_directory_eligible() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "go.mod", "module example.com/app\n\ngo 1.22\n");
        assert!(is_eligible(temp_dir.path()));
    }

    #[test]
    fn test_workspace_manifest_makes_directory_eligible() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "go.work", "go 1.22\n\nuse ./svc\n");
        assert!(is_eligible(temp_dir.path()));
    }

    #[test]
    fn test_only_test_files_are_not_eligible() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a_test.go", "package a\n");
        write(temp_dir.path(), "b_test.go", "package a\n");
        write(temp_dir.path(), "c_test.go", "package a\n");
        write(temp_dir.path(), "README.md", "# readme\n");
        assert!(!is_eligible(temp_dir.path()));
    }

    #[test]
    fn test_three_source_files_are_eligible() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "main.go", "package main\n");
        write(temp_dir.path(), "pkg/a.go", "package pkg\n");
        write(temp_dir.path(), "pkg/deep/b.go", "package deep\n");
        assert!(is_eligible(temp_dir.path()));
    }

    #[test]
    fn test_vendor_and_hidden_dirs_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "main.go", "package main\n");
        write(temp_dir.path(), "vendor/dep/a.go", "package dep\n");
        write(temp_dir.path(), "vendor/dep/b.go", "package dep\n");
        write(temp_dir.path(), ".cache/c.go", "package cache\n");
        write(temp_dir.path(), "testdata/d.go", "package fixture\n");
        assert!(!is_eligible(temp_dir.path()));
        assert_eq!(count_source_files(temp_dir.path(), usize::MAX), 1);
    }

    #[test]
    fn test_count_stops_at_limit() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..10 {
            write(temp_dir.path(), &format!("f{}.go", i), "package main\n");
        }
        assert_eq!(count_source_files(temp_dir.path(), MIN_SOURCE_FILES), 3);
    }

    #[test]
    fn test_missing_root_is_not_eligible() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_eligible(&temp_dir.path().join("nope")));
    }
}
