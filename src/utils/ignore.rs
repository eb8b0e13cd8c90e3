//! Utilities for include/exclude patterns and the .gosynthignore file
//!
//! Patterns are matched against relative Unix-style paths. A pattern that is a
//! valid glob is matched as a glob; anything else falls back to the simple
//! directory / extension / substring rules of [`is_ignored_by_pattern`].
//!
use anyhow::Result;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the optional ignore file at the repository root
pub const IGNORE_FILE: &str = ".gosynthignore";

/// Load custom ignore patterns from .gosynthignore in the repository root
///
/// Returns a vector of patterns to ignore. Empty lines and comments (lines starting with #) are skipped.
///
/// # Examples
///
/// ```text
/// # .gosynthignore file content
/// generated/
/// *.pb.go
/// internal/mocks/**
/// ```
pub fn load_ignore_file(workspace_path: &Path) -> Result<Vec<String>> {
    let ignore_file = workspace_path.join(IGNORE_FILE);

    if !ignore_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", IGNORE_FILE, e))?;

    let patterns: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();

    if !patterns.is_empty() {
        debug!(
            "Loaded {} custom ignore patterns from {}",
            patterns.len(),
            IGNORE_FILE
        );
    }

    Ok(patterns)
}

/// Check if a path matches any of the simple ignore patterns
///
/// Supports three pattern types with proper word boundary handling:
/// - Directory patterns (ending with /): matches directory name as whole word, plus all contents
/// - Wildcard extension patterns (starting with *.): matches file suffix
/// - Substring patterns: matches anywhere in path
pub fn is_ignored_by_pattern(path: &str, patterns: &[String]) -> bool {
    let path_str = path.replace('\\', "/");

    patterns.iter().any(|pattern| {
        if let Some(dir_name) = pattern.strip_suffix('/') {
            // Directory as a whole path component, at any depth
            path_str
                .split('/')
                .any(|component| component == dir_name)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            path_str.ends_with(suffix)
        } else {
            path_str.contains(pattern.as_str())
        }
    })
}

/// One compiled include/exclude pattern
#[derive(Debug, Clone)]
enum Matcher {
    Glob(Pattern),
    Simple(String),
}

/// Compiled include and exclude pattern sets
///
/// A path is selected when it matches no exclude pattern and, if any include
/// patterns exist, at least one include pattern.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    includes: Vec<Matcher>,
    excludes: Vec<Matcher>,
}

impl PathFilter {
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Self {
        Self {
            includes: include_patterns.iter().map(|p| compile(p)).collect(),
            excludes: exclude_patterns.iter().map(|p| compile(p)).collect(),
        }
    }

    /// Whether a relative Unix-style path should be analyzed
    pub fn is_selected(&self, relative_path: &str) -> bool {
        if self.excludes.iter().any(|m| matches(m, relative_path)) {
            return false;
        }
        self.includes.is_empty() || self.includes.iter().any(|m| matches(m, relative_path))
    }
}

fn compile(pattern: &str) -> Matcher {
    // Directory patterns keep their component semantics
    if pattern.ends_with('/') {
        return Matcher::Simple(pattern.to_string());
    }

    let has_glob_syntax = pattern.contains(['*', '?', '[']);
    if !has_glob_syntax {
        return Matcher::Simple(pattern.to_string());
    }

    match Pattern::new(pattern) {
        Ok(glob) => Matcher::Glob(glob),
        Err(e) => {
            warn!("Invalid glob pattern '{}': {} - using substring match", pattern, e);
            Matcher::Simple(pattern.to_string())
        }
    }
}

fn matches(matcher: &Matcher, relative_path: &str) -> bool {
    match matcher {
        Matcher::Glob(glob) => {
            let options = MatchOptions {
                case_sensitive: true,
                require_literal_separator: false,
                require_literal_leading_dot: false,
            };
            // Bare patterns like `*.pb.go` also apply to the file name alone
            glob.matches_with(relative_path, options)
                || relative_path
                    .rsplit('/')
                    .next()
                    .is_some_and(|file_name| glob.matches_with(file_name, options))
        }
        Matcher::Simple(pattern) => is_ignored_by_pattern(relative_path, std::slice::from_ref(pattern)),
    }
}
