use crate::extractors::base::{Construct, ConstructKind, ConstructOptions};
use tree_sitter::Node;

/// Function and method extraction for Go
impl super::GoExtractor {
    pub(super) fn extract_function(&self, node: Node) -> Construct {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.get_node_text(n))
            .unwrap_or_else(|| "anonymous".to_string());

        self.build_callable(node, name, None)
    }

    pub(super) fn extract_method(&self, node: Node) -> Construct {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.get_node_text(n))
            .unwrap_or_else(|| "anonymous".to_string());

        // A method is defined by its receiver list; keep it even when empty
        let receiver = node
            .child_by_field_name("receiver")
            .map(|list| self.extract_receiver(list))
            .unwrap_or_else(|| (String::new(), "<missing>".to_string()));

        self.build_callable(node, name, Some(receiver))
    }

    /// Shared construction for functions and methods
    ///
    /// `receiver` is `(receiver list text, receiver type)`; its presence
    /// selects the `method` kind.
    fn build_callable(
        &self,
        node: Node,
        name: String,
        receiver: Option<(String, String)>,
    ) -> Construct {
        let type_params = node
            .child_by_field_name("type_parameters")
            .map(|tp| self.get_node_text(tp))
            .unwrap_or_default();

        let parameters = node
            .child_by_field_name("parameters")
            .map(|list| self.extract_parameter_list(list))
            .unwrap_or_default();

        let return_types = node
            .child_by_field_name("result")
            .map(|result| self.extract_result_types(result))
            .unwrap_or_default();

        let signature = self.build_function_signature_with_return_types(
            receiver.as_ref().map(|(text, _)| text.as_str()),
            &name,
            &type_params,
            &parameters,
            &return_types,
        );

        let mut metadata = self.base_metadata(node);
        if !type_params.is_empty() {
            metadata.insert("type_params".to_string(), type_params);
        }
        if parameters.iter().any(|p| p.contains("...")) {
            metadata.insert("variadic".to_string(), "true".to_string());
        }

        let (kind, receiver_type) = match receiver {
            Some((_, receiver_type)) => (ConstructKind::Method, Some(receiver_type)),
            None => (ConstructKind::Func, None),
        };

        self.base.create_construct(
            &node,
            name,
            kind,
            ConstructOptions {
                signature,
                receiver_type,
                parameters,
                returns: return_types,
                metadata,
                ..Default::default()
            },
        )
    }

    /// Receiver list text (`u *User`) and stringified receiver type (`*User`)
    fn extract_receiver(&self, list: Node) -> (String, String) {
        let text = self.extract_parameter_list(list).join(", ");

        let mut cursor = list.walk();
        let receiver_type = list
            .named_children(&mut cursor)
            .find(|child| child.kind() == "parameter_declaration")
            .and_then(|param| self.stringify_field(param, "type"))
            .unwrap_or_else(|| "<missing>".to_string());

        (text, receiver_type)
    }

    /// One entry per declared parameter: `name type`, bare `type`, or `name ...type`
    pub(super) fn extract_parameter_list(&self, node: Node) -> Vec<String> {
        let mut parameters = Vec::new();
        let mut cursor = node.walk();

        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "parameter_declaration" => {
                    let param_type = self
                        .stringify_field(child, "type")
                        .unwrap_or_else(|| "<missing>".to_string());
                    let names = self.field_texts(child, "name");

                    if names.is_empty() {
                        parameters.push(param_type); // Anonymous parameter
                    } else {
                        for name in names {
                            parameters.push(format!("{} {}", name, param_type));
                        }
                    }
                }
                "variadic_parameter_declaration" => {
                    let param_type = self
                        .stringify_field(child, "type")
                        .unwrap_or_else(|| "<missing>".to_string());
                    match self.field_texts(child, "name").first() {
                        Some(name) => parameters.push(format!("{} ...{}", name, param_type)),
                        None => parameters.push(format!("...{}", param_type)),
                    }
                }
                _ => {}
            }
        }

        parameters
    }

    /// One stringified type per result; named results repeat their type per name
    pub(super) fn extract_result_types(&self, result: Node) -> Vec<String> {
        if result.kind() != "parameter_list" {
            return vec![self.stringify_node(result)];
        }

        let mut return_types = Vec::new();
        let mut cursor = result.walk();
        for child in result.named_children(&mut cursor) {
            match child.kind() {
                "parameter_declaration" => {
                    let result_type = self
                        .stringify_field(child, "type")
                        .unwrap_or_else(|| "<missing>".to_string());
                    let count = self.field_texts(child, "name").len().max(1);
                    return_types.extend(std::iter::repeat(result_type).take(count));
                }
                "variadic_parameter_declaration" => {
                    let result_type = self
                        .stringify_field(child, "type")
                        .unwrap_or_else(|| "<missing>".to_string());
                    return_types.push(format!("...{}", result_type));
                }
                _ => {}
            }
        }

        return_types
    }
}
