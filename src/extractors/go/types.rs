use crate::extractors::base::{Construct, ConstructKind, ConstructOptions};
use tree_sitter::Node;

/// Type declaration extraction for Go (structs, interfaces, definitions and aliases)
impl super::GoExtractor {
    /// A `type` declaration may hold a single spec or a parenthesized group
    pub(super) fn extract_type_declaration(&self, node: Node) -> Vec<Construct> {
        let mut constructs = Vec::new();
        let mut cursor = node.walk();

        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "type_spec" => constructs.extend(self.extract_type_spec(child, false)),
                "type_alias" => constructs.extend(self.extract_type_spec(child, true)),
                _ => {}
            }
        }

        constructs
    }

    pub(super) fn extract_type_spec(&self, node: Node, is_alias: bool) -> Option<Construct> {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.get_node_text(n))
            .filter(|n| !n.is_empty())?;
        let type_params = node
            .child_by_field_name("type_parameters")
            .map(|tp| self.get_node_text(tp))
            .unwrap_or_default();

        let mut metadata = self.base_metadata(node);
        if !type_params.is_empty() {
            metadata.insert("type_params".to_string(), type_params.clone());
        }

        let Some(type_node) = node.child_by_field_name("type") else {
            // Grammar recovery left no underlying type; keep the name visible
            return Some(self.base.create_construct(
                &node,
                name.clone(),
                ConstructKind::Type,
                ConstructOptions {
                    signature: format!("type {}{} = <missing>", name, type_params),
                    metadata,
                    ..Default::default()
                },
            ));
        };

        let construct = match type_node.kind() {
            "struct_type" if !is_alias => self.base.create_construct(
                &node,
                name.clone(),
                ConstructKind::Struct,
                ConstructOptions {
                    signature: format!("type {}{} struct", name, type_params),
                    fields: self.extract_struct_fields(type_node),
                    metadata,
                    ..Default::default()
                },
            ),
            "interface_type" if !is_alias => self.base.create_construct(
                &node,
                name.clone(),
                ConstructKind::Interface,
                ConstructOptions {
                    signature: format!("type {}{} interface", name, type_params),
                    methods: self.extract_interface_elements(type_node),
                    metadata,
                    ..Default::default()
                },
            ),
            _ => {
                if is_alias {
                    metadata.insert("alias".to_string(), "true".to_string());
                }
                let underlying = self.stringify_node(type_node);
                self.base.create_construct(
                    &node,
                    name.clone(),
                    ConstructKind::Type,
                    ConstructOptions {
                        signature: format!("type {}{} = {}", name, type_params, underlying),
                        metadata,
                        ..Default::default()
                    },
                )
            }
        };

        Some(construct)
    }

    /// One entry per field: `Name Type [tag]`, or the bare type for embedded fields
    pub(super) fn extract_struct_fields(&self, struct_node: Node) -> Vec<String> {
        let mut fields = Vec::new();

        let mut cursor = struct_node.walk();
        let Some(list) = struct_node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "field_declaration_list")
        else {
            return fields;
        };

        let mut list_cursor = list.walk();
        for field in list.named_children(&mut list_cursor) {
            if field.kind() != "field_declaration" {
                continue;
            }

            let field_type = self
                .stringify_field(field, "type")
                .unwrap_or_else(|| "<missing>".to_string());
            let names = self.field_texts(field, "name");

            if names.is_empty() {
                // Embedded field; the optional `*` is an anonymous token
                let mut field_cursor = field.walk();
                let is_pointer = field
                    .children(&mut field_cursor)
                    .any(|child| child.kind() == "*");
                if is_pointer {
                    fields.push(format!("*{}", field_type));
                } else {
                    fields.push(field_type);
                }
                continue;
            }

            let tag = field
                .child_by_field_name("tag")
                .map(|tag| self.get_node_text(tag));
            for name in names {
                let mut entry = format!("{} {}", name, field_type);
                if let Some(ref tag) = tag {
                    entry.push(' ');
                    entry.push_str(tag);
                }
                fields.push(entry);
            }
        }

        fields
    }

    /// One entry per interface element: method signatures or embedded/union types
    pub(super) fn extract_interface_elements(&self, interface_node: Node) -> Vec<String> {
        let mut methods = Vec::new();
        let mut cursor = interface_node.walk();

        for child in interface_node.named_children(&mut cursor) {
            match child.kind() {
                "method_elem" | "method_spec" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| self.get_node_text(n))
                        .unwrap_or_else(|| "<missing>".to_string());
                    let parameters = child
                        .child_by_field_name("parameters")
                        .map(|list| self.extract_parameter_list(list))
                        .unwrap_or_default();
                    let return_types = child
                        .child_by_field_name("result")
                        .map(|result| self.extract_result_types(result))
                        .unwrap_or_default();
                    methods.push(self.build_method_elem_signature(
                        &name,
                        &parameters,
                        &return_types,
                    ));
                }
                "type_elem" | "constraint_elem" => {
                    // Embedded interface or a `~int | ~string` union
                    let mut elem_cursor = child.walk();
                    let terms: Vec<String> = child
                        .named_children(&mut elem_cursor)
                        .filter(|term| term.kind() != "comment")
                        .map(|term| self.stringify_node(term))
                        .collect();
                    if !terms.is_empty() {
                        methods.push(terms.join(" | "));
                    }
                }
                "comment" => {}
                // Older grammars expose embedded names directly
                _ => methods.push(self.stringify_node(child)),
            }
        }

        methods
    }
}
