use super::stringify::stringify;
use super::syntax::Syntax;
use std::collections::BTreeMap;
use tree_sitter::Node;

/// Helper methods for node text, type rendering and construct metadata
impl super::GoExtractor {
    /// Get node text (helper method)
    pub(super) fn get_node_text(&self, node: Node) -> String {
        self.base.get_node_text(&node)
    }

    /// Render any type or expression node through the syntax model
    pub(super) fn stringify_node(&self, node: Node) -> String {
        stringify(&Syntax::from_node(node, &self.base.content))
    }

    /// Render the node stored under `field`, if the grammar produced one
    pub(super) fn stringify_field(&self, node: Node, field: &str) -> Option<String> {
        node.child_by_field_name(field)
            .map(|child| self.stringify_node(child))
    }

    /// Text of every child stored under `field` (declared names of a spec)
    pub(super) fn field_texts(&self, node: Node, field: &str) -> Vec<String> {
        let mut cursor = node.walk();
        let texts: Vec<String> = node
            .children_by_field_name(field, &mut cursor)
            .map(|child| self.get_node_text(child))
            .collect();
        texts
    }

    /// Expressions of a `value` expression list, stringified in order
    pub(super) fn value_texts(&self, spec: Node) -> Vec<String> {
        let Some(list) = spec.child_by_field_name("value") else {
            return Vec::new();
        };
        let mut cursor = list.walk();
        let values: Vec<String> = list
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .map(|child| self.stringify_node(child))
            .collect();
        values
    }

    /// Doc comment of a node, falling back to its enclosing declaration
    ///
    /// Specs inside `type (...)`/`var (...)` groups carry their own comments;
    /// a lone spec's comment sits above the declaration keyword instead.
    pub(super) fn find_doc_comment(&self, node: Node) -> Option<String> {
        self.base.find_doc_comment(&node).or_else(|| {
            node.parent()
                .filter(|parent| parent.kind().ends_with("_declaration"))
                .and_then(|parent| self.base.find_doc_comment(&parent))
        })
    }

    /// Base metadata shared by all constructs: the doc comment when present
    pub(super) fn base_metadata(&self, node: Node) -> BTreeMap<String, String> {
        let mut metadata = BTreeMap::new();
        if let Some(doc) = self.find_doc_comment(node) {
            metadata.insert("doc".to_string(), doc);
        }
        metadata
    }
}
