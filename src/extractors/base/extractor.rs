// BaseExtractor implementation for gosynth
//
// Holds per-file state (path, source text, package) and the shared node helpers
// used by the Go extractor.

use tree_sitter::Node;

use super::types::{is_exported, Construct, ConstructKind, ConstructOptions};

/// Per-file extraction state
pub struct BaseExtractor {
    /// Relative Unix-style path recorded on every construct
    pub file_path: String,
    pub content: String,
    /// Declared package, filled in once the package clause is seen
    pub package_name: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            file_path,
            content,
            package_name: String::new(),
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Collect the `//` comment lines directly above a declaration
    ///
    /// A blank line between the comment block and the declaration breaks the
    /// association, matching how `go doc` attaches comments.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut comments = Vec::new();
        let mut expected_row = node.start_position().row;

        let mut current = node.prev_named_sibling();
        while let Some(sibling) = current {
            if sibling.kind() != "comment" || sibling.end_position().row + 1 != expected_row {
                break;
            }
            let text = self.get_node_text(&sibling);
            let Some(line) = text.strip_prefix("//") else {
                break;
            };
            comments.push(line.trim().to_string());
            expected_row = sibling.start_position().row;
            current = sibling.prev_named_sibling();
        }

        if comments.is_empty() {
            None
        } else {
            // Reverse to get original order (top to bottom)
            comments.reverse();
            Some(comments.join("\n"))
        }
    }

    /// Create a construct anchored at `node`
    pub fn create_construct(
        &self,
        node: &Node,
        name: String,
        kind: ConstructKind,
        options: ConstructOptions,
    ) -> Construct {
        let exported = is_exported(&name);

        Construct {
            kind,
            exported,
            name,
            signature: options.signature,
            package_name: self.package_name.clone(),
            file_path: self.file_path.clone(),
            line: (node.start_position().row + 1) as u32, // 1-based line numbers
            receiver_type: options.receiver_type,
            parameters: options.parameters,
            returns: options.returns,
            fields: options.fields,
            methods: options.methods,
            metadata: options.metadata,
        }
    }
}
