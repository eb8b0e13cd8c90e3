// gosynth Utilities Module
//
// Common helpers shared by discovery, extraction and synthesis.

use anyhow::Result;
use std::path::Path;

/// File utilities
pub mod file_utils {
    use super::*;
    use std::fs;

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

/// Compute the blake3 hex digest of a content string
///
/// Used as the document fingerprint for change detection by the driver.
pub fn hash_content(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Path conversion utilities (absolute ↔ relative Unix-style)
pub mod paths;

/// Include/exclude pattern utilities (.gosynthignore support)
pub mod ignore;
