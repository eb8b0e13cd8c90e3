mod functions;
mod helpers;
mod signatures;
mod specs;
pub mod stringify;
pub mod syntax;
mod types;

use crate::extractors::base::{BaseExtractor, Construct, FileAnalysis};
use anyhow::{anyhow, Result};
use tree_sitter::{Node, Tree};

pub use stringify::{format_results, stringify, COMPOSITE_ELEMENT_LIMIT};
pub use syntax::{ChanDir, Syntax};

/// Go language extractor for package-level declarations:
/// - Constants and variables (one construct per declared name)
/// - Structs, interfaces, and other type definitions/aliases
/// - Functions and methods with receivers
///
/// Only top-level declarations are visited; function bodies are never walked.
pub struct GoExtractor {
    base: BaseExtractor,
}

impl GoExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    /// Extract every package-level construct of a parsed file
    ///
    /// Fails only when the file has no package clause; everything else
    /// degrades to placeholder text inside signatures.
    pub fn extract_file(&mut self, tree: &Tree) -> Result<FileAnalysis> {
        let root = tree.root_node();

        let package_name = self
            .extract_package(root)
            .ok_or_else(|| anyhow!("missing package clause in {}", self.base.file_path))?;
        self.base.package_name = package_name;

        let mut constructs = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            constructs.extend(self.extract_declaration(child));
        }

        tracing::debug!(
            "Extracted {} constructs from {} (package {})",
            constructs.len(),
            self.base.file_path,
            self.base.package_name
        );

        Ok(FileAnalysis {
            file_path: self.base.file_path.clone(),
            package_name: self.base.package_name.clone(),
            constructs,
        })
    }

    /// Dispatch one top-level node to the matching extraction routine
    fn extract_declaration(&self, node: Node) -> Vec<Construct> {
        match node.kind() {
            "function_declaration" => vec![self.extract_function(node)],
            "method_declaration" => vec![self.extract_method(node)],
            "type_declaration" => self.extract_type_declaration(node),
            "var_declaration" => self.extract_var_symbols(node),
            "const_declaration" => self.extract_const_symbols(node),
            _ => Vec::new(),
        }
    }

    fn extract_package(&self, root: Node) -> Option<String> {
        let mut cursor = root.walk();
        let clause = root
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_clause")?;

        let mut clause_cursor = clause.walk();
        let name = clause
            .named_children(&mut clause_cursor)
            .find(|child| child.kind() == "package_identifier")
            .map(|ident| self.get_node_text(ident))
            .filter(|name| !name.is_empty());
        name
    }
}
