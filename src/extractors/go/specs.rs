use crate::extractors::base::{Construct, ConstructKind, ConstructOptions};
use tree_sitter::Node;

/// Extraction of variable and constant specifications
impl super::GoExtractor {
    pub(super) fn extract_var_symbols(&self, node: Node) -> Vec<Construct> {
        let mut constructs = Vec::new();
        self.collect_specs(node, "var_spec", &mut |spec| {
            constructs.extend(self.extract_value_spec(spec, ConstructKind::Var));
        });
        constructs
    }

    pub(super) fn extract_const_symbols(&self, node: Node) -> Vec<Construct> {
        let mut constructs = Vec::new();
        self.collect_specs(node, "const_spec", &mut |spec| {
            constructs.extend(self.extract_value_spec(spec, ConstructKind::Const));
        });
        constructs
    }

    /// Visit specs directly under a declaration or inside a `(...)` spec list
    fn collect_specs(&self, node: Node, spec_kind: &str, visit: &mut dyn FnMut(Node)) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == spec_kind {
                visit(child);
            } else if child.kind().ends_with("_spec_list") {
                self.collect_specs(child, spec_kind, visit);
            }
        }
    }

    /// One construct per declared name of a `var`/`const` spec
    ///
    /// Values pair up with names positionally; when the counts differ
    /// (`var a, b = pair()`) every name shows the whole value list.
    fn extract_value_spec(&self, spec: Node, kind: ConstructKind) -> Vec<Construct> {
        let value_type = self.stringify_field(spec, "type");
        let values = self.value_texts(spec);
        let metadata = self.base_metadata(spec);

        let mut cursor = spec.walk();
        let name_nodes: Vec<Node> = spec.children_by_field_name("name", &mut cursor).collect();
        let paired = values.len() == name_nodes.len();

        name_nodes
            .iter()
            .enumerate()
            .filter_map(|(index, name_node)| {
                let name = self.get_node_text(*name_node);
                if name.is_empty() || name == "_" {
                    return None;
                }

                let value = if paired {
                    values.get(index).cloned()
                } else if values.is_empty() {
                    None
                } else {
                    Some(values.join(", "))
                };

                let signature = match kind {
                    ConstructKind::Const => self.build_const_signature(
                        &name,
                        value_type.as_deref(),
                        value.as_deref(),
                    ),
                    _ => self.build_var_signature(&name, value_type.as_deref(), value.as_deref()),
                };

                let mut metadata = metadata.clone();
                if let Some(ref typ) = value_type {
                    metadata.insert("type".to_string(), typ.clone());
                }

                Some(self.base.create_construct(
                    name_node,
                    name,
                    kind,
                    ConstructOptions {
                        signature,
                        metadata,
                        ..Default::default()
                    },
                ))
            })
            .collect()
    }
}
