//! ExtractorManager - Public API for per-file construct extraction
//!
//! Reads and parses a single Go file and hands the tree to the Go extractor.
//! Every failure is returned as an error so the engine can downgrade it to a
//! warning and keep going with the remaining files.

use crate::extractors::base::FileAnalysis;
use crate::extractors::go::GoExtractor;
use crate::language::parse_go;
use crate::utils::file_utils::read_file_content;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Manager for the Go extractor
pub struct ExtractorManager {
    // No state needed - this is a stateless manager
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Read `workspace_root/relative_path` and extract its constructs
    pub fn analyze_path(&self, relative_path: &str, workspace_root: &Path) -> Result<FileAnalysis> {
        let absolute = crate::utils::paths::to_absolute_native(relative_path, workspace_root);
        let content = read_file_content(&absolute)
            .with_context(|| format!("Failed to read {}", relative_path))?;

        self.analyze_file(relative_path, &content)
    }

    /// Parse file content and extract its constructs
    ///
    /// A tree containing syntax errors counts as a parse failure: partial trees
    /// would produce misleading signatures.
    pub fn analyze_file(&self, file_path: &str, content: &str) -> Result<FileAnalysis> {
        let tree = parse_go(content).with_context(|| format!("Failed to parse {}", file_path))?;

        let root = tree.root_node();
        if root.has_error() {
            let position = first_error_position(root)
                .map(|(line, column)| format!(" near line {}, column {}", line, column))
                .unwrap_or_default();
            bail!("Syntax error in {}{}", file_path, position);
        }

        let mut extractor = GoExtractor::new(file_path.to_string(), content.to_string());
        let analysis = extractor.extract_file(&tree)?;

        tracing::debug!(
            "Extracted {} constructs from go file: {}",
            analysis.constructs.len(),
            file_path
        );
        Ok(analysis)
    }
}

/// 1-based position of the first ERROR or MISSING node, in document order
fn first_error_position(root: tree_sitter::Node) -> Option<(usize, usize)> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let position = node.start_position();
            return Some((position.row + 1, position.column + 1));
        }
        if !node.has_error() {
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<tree_sitter::Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}
