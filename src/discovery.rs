//! File discovery for synthesis runs.
//!
//! Walks the repository root, skipping hidden and vendor directories, and
//! returns the sorted relative Unix-style paths of non-test `.go` files that
//! pass the configured include/exclude patterns and `.gosynthignore`.

use crate::eligibility::is_skipped_entry;
use crate::error::{SynthesisError, SynthesisResult};
use crate::language::is_go_source_file;
use crate::utils::ignore::{load_ignore_file, PathFilter};
use crate::utils::paths::to_relative_unix_style;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Discover analyzable Go files under `root`
///
/// Unreadable subdirectories and unreadable ignore files are logged and
/// skipped; only a failure to read the root itself aborts discovery.
pub fn discover_go_files(
    root: &Path,
    include_patterns: &[String],
    exclude_patterns: &[String],
) -> SynthesisResult<Vec<String>> {
    if !root.is_dir() {
        return Err(SynthesisError::InvalidRoot {
            root: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut excludes = exclude_patterns.to_vec();
    match load_ignore_file(root) {
        Ok(patterns) => excludes.extend(patterns),
        Err(e) => warn!("Ignoring unreadable ignore file in {}: {}", root.display(), e),
    }
    let filter = PathFilter::new(include_patterns, &excludes);

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_entry(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(SynthesisError::Walk {
                    root: root.to_path_buf(),
                    source: e,
                })
            }
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_go_source_file(entry.path()) {
            continue;
        }

        let relative = match to_relative_unix_style(entry.path(), root) {
            Ok(relative) => relative,
            Err(e) => {
                warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        if filter.is_selected(&relative) {
            files.push(relative);
        } else {
            debug!("Excluded by pattern: {}", relative);
        }
    }

    files.sort();
    debug!("Discovered {} Go files under {}", files.len(), root.display());
    Ok(files)
}
