//! Language Support - tree-sitter configuration for Go
//!
//! ALL Go-specific parser configuration and file classification lives here so the
//! eligibility detector, discovery, and the extractor manager agree on what a
//! Go source file is.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// Language name used for the parser lookup
pub const GO_LANGUAGE: &str = "go";

/// Root-level files that mark a directory as a Go project
pub const MANIFEST_FILES: [&str; 2] = ["go.mod", "go.work"];

/// Directories never descended into (dependencies and fixtures)
pub const VENDOR_DIRS: [&str; 4] = ["vendor", "node_modules", "testdata", "third_party"];

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        GO_LANGUAGE => Ok(tree_sitter_go::LANGUAGE.into()),
        _ => Err(anyhow!(
            "Unsupported language: '{}'. Supported languages: go",
            language
        )),
    }
}

/// Detect language from file extension
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "go" => Some(GO_LANGUAGE),
        _ => None,
    }
}

/// Parse Go source text into a tree-sitter tree
pub fn parse_go(content: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let language = get_tree_sitter_language(GO_LANGUAGE)?;
    parser
        .set_language(&language)
        .context("Failed to set parser language for go")?;

    parser
        .parse(content, None)
        .ok_or_else(|| anyhow!("tree-sitter returned no tree"))
}

/// `_test.go` files are compiled only by `go test` and never summarized
pub fn is_go_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}

/// Non-test Go source file
pub fn is_go_source_file(path: &Path) -> bool {
    let is_go = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
        .is_some();
    is_go && !is_go_test_file(path)
}

/// Hidden or dependency directory that discovery must skip
pub fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || VENDOR_DIRS.contains(&name)
}
