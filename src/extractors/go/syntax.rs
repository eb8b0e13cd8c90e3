//! Closed syntax model for Go type and expression nodes.
//!
//! Tree-sitter nodes are lowered into [`Syntax`] before being stringified, so
//! rendering is an exhaustive match over a sum type instead of a string switch
//! on node kinds. Lowering is total: node kinds that are not modelled become
//! [`Syntax::Unknown`], absent children become [`Syntax::Missing`], and
//! subtrees past [`MAX_SYNTAX_DEPTH`] become [`Syntax::Elided`].

use tree_sitter::Node;

/// Direction of a channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// A Go type or expression, reduced to what rendering needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Syntax {
    /// Identifiers of every flavour (type, field, package, value)
    Ident(String),
    /// Basic literals and predeclared values, kept verbatim
    Literal(String),
    /// Source text kept as written (generic instantiations, type parameter lists)
    Verbatim(String),
    Pointer(Box<Syntax>),
    Slice(Box<Syntax>),
    Array {
        len: Box<Syntax>,
        elem: Box<Syntax>,
    },
    Map {
        key: Box<Syntax>,
        value: Box<Syntax>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<Syntax>,
    },
    Func {
        params: Vec<Syntax>,
        results: Vec<Syntax>,
    },
    /// Interface type used as a type reference
    Interface,
    /// Struct type used as a type reference
    Struct,
    /// `...T` in a parameter list
    Variadic(Box<Syntax>),
    /// `xs...` as the last call argument
    Spread(Box<Syntax>),
    Selector {
        operand: Box<Syntax>,
        field: String,
    },
    Binary {
        left: Box<Syntax>,
        op: String,
        right: Box<Syntax>,
    },
    Unary {
        op: String,
        operand: Box<Syntax>,
    },
    Call {
        callee: Box<Syntax>,
        args: Vec<Syntax>,
    },
    Composite {
        ty: Option<Box<Syntax>>,
        elems: Vec<Syntax>,
    },
    Index {
        operand: Box<Syntax>,
        indices: Vec<Syntax>,
    },
    SliceExpr {
        operand: Box<Syntax>,
        low: Option<Box<Syntax>>,
        high: Option<Box<Syntax>>,
        max: Option<Box<Syntax>>,
    },
    /// `x.(T)`; `ty` is `None` for the `x.(type)` switch guard
    TypeAssert {
        operand: Box<Syntax>,
        ty: Option<Box<Syntax>>,
    },
    Paren(Box<Syntax>),
    KeyValue {
        key: Box<Syntax>,
        value: Box<Syntax>,
    },
    /// Subtree nested past the lowering depth limit
    Elided,
    /// A required child that the tree did not contain
    Missing,
    /// Any node kind not modelled above
    Unknown(String),
}

/// Nesting levels lowered before the rest of a subtree is elided
///
/// Every operand of a generated chain like `a + b + ...` adds one level.
pub const MAX_SYNTAX_DEPTH: usize = 128;

impl Syntax {
    /// Lower a tree-sitter node into the syntax model
    ///
    /// Subtrees nested deeper than [`MAX_SYNTAX_DEPTH`] become [`Syntax::Elided`].
    pub fn from_node(node: Node, source: &str) -> Syntax {
        lower(node, source, 0)
    }

    /// Deepest nesting level of the tree, a leaf being 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((syntax, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(syntax.children().into_iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    fn children(&self) -> Vec<&Syntax> {
        match self {
            Syntax::Pointer(inner)
            | Syntax::Slice(inner)
            | Syntax::Variadic(inner)
            | Syntax::Spread(inner)
            | Syntax::Paren(inner) => vec![&**inner],
            Syntax::Chan { elem, .. } => vec![&**elem],
            Syntax::Selector { operand, .. } | Syntax::Unary { operand, .. } => vec![&**operand],
            Syntax::Array { len: a, elem: b }
            | Syntax::Map { key: a, value: b }
            | Syntax::Binary { left: a, right: b, .. }
            | Syntax::KeyValue { key: a, value: b } => vec![&**a, &**b],
            Syntax::Func { params, results } => params.iter().chain(results).collect(),
            Syntax::Call { callee, args } => std::iter::once(&**callee).chain(args).collect(),
            Syntax::Composite { ty, elems } => ty.as_deref().into_iter().chain(elems).collect(),
            Syntax::Index { operand, indices } => {
                std::iter::once(&**operand).chain(indices).collect()
            }
            Syntax::SliceExpr {
                operand,
                low,
                high,
                max,
            } => std::iter::once(&**operand)
                .chain(low.as_deref())
                .chain(high.as_deref())
                .chain(max.as_deref())
                .collect(),
            Syntax::TypeAssert { operand, ty } => {
                std::iter::once(&**operand).chain(ty.as_deref()).collect()
            }
            Syntax::Ident(_)
            | Syntax::Literal(_)
            | Syntax::Verbatim(_)
            | Syntax::Interface
            | Syntax::Struct
            | Syntax::Elided
            | Syntax::Missing
            | Syntax::Unknown(_) => Vec::new(),
        }
    }
}

fn lower(node: Node, source: &str, depth: usize) -> Syntax {
    if depth >= MAX_SYNTAX_DEPTH {
        return Syntax::Elided;
    }

    match node.kind() {
        "identifier" | "type_identifier" | "field_identifier" | "package_identifier"
        | "label_name" | "blank_identifier" => Syntax::Ident(node_text(node, source)),

        "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal"
        | "interpreted_string_literal" | "raw_string_literal" | "true" | "false" | "nil"
        | "iota" => Syntax::Literal(node_text(node, source)),

        "generic_type" | "type_parameter_list" | "type_arguments" | "negated_type"
        | "type_constraint" => Syntax::Verbatim(node_text(node, source)),

        "pointer_type" => Syntax::Pointer(Box::new(first_named(node, source, depth))),
        "slice_type" => Syntax::Slice(Box::new(field(node, "element", source, depth))),
        "array_type" => Syntax::Array {
            len: Box::new(field(node, "length", source, depth)),
            elem: Box::new(field(node, "element", source, depth)),
        },
        "implicit_length_array_type" => Syntax::Array {
            len: Box::new(Syntax::Literal("...".to_string())),
            elem: Box::new(field(node, "element", source, depth)),
        },
        "map_type" => Syntax::Map {
            key: Box::new(field(node, "key", source, depth)),
            value: Box::new(field(node, "value", source, depth)),
        },
        "channel_type" => Syntax::Chan {
            dir: channel_direction(node),
            elem: Box::new(field(node, "value", source, depth)),
        },
        "function_type" => Syntax::Func {
            params: node
                .child_by_field_name("parameters")
                .map(|list| parameter_types(list, source, depth))
                .unwrap_or_default(),
            results: node
                .child_by_field_name("result")
                .map(|result| result_types(result, source, depth))
                .unwrap_or_default(),
        },
        "interface_type" => Syntax::Interface,
        "struct_type" => Syntax::Struct,
        "qualified_type" => Syntax::Selector {
            operand: Box::new(field(node, "package", source, depth)),
            field: field_text(node, "name", source),
        },
        "parenthesized_type" | "parenthesized_expression" => {
            Syntax::Paren(Box::new(first_named(node, source, depth)))
        }

        "selector_expression" => Syntax::Selector {
            operand: Box::new(field(node, "operand", source, depth)),
            field: field_text(node, "field", source),
        },
        "binary_expression" => Syntax::Binary {
            left: Box::new(field(node, "left", source, depth)),
            op: field_text(node, "operator", source),
            right: Box::new(field(node, "right", source, depth)),
        },
        "unary_expression" => Syntax::Unary {
            op: field_text(node, "operator", source),
            operand: Box::new(field(node, "operand", source, depth)),
        },
        "call_expression" => Syntax::Call {
            callee: Box::new(field(node, "function", source, depth)),
            args: node
                .child_by_field_name("arguments")
                .map(|args| named_children(args, source, depth))
                .unwrap_or_default(),
        },
        "type_conversion_expression" => Syntax::Call {
            callee: Box::new(field(node, "type", source, depth)),
            args: vec![field(node, "operand", source, depth)],
        },
        "variadic_argument" => Syntax::Spread(Box::new(first_named(node, source, depth))),
        "composite_literal" => Syntax::Composite {
            ty: optional_field(node, "type", source, depth),
            elems: node
                .child_by_field_name("body")
                .map(|body| named_children(body, source, depth))
                .unwrap_or_default(),
        },
        "literal_value" => Syntax::Composite {
            ty: None,
            elems: named_children(node, source, depth),
        },
        // Wrapper around an expression or nested literal_value
        "literal_element" => first_named(node, source, depth),
        "keyed_element" => {
            let (key, value) = keyed_parts(node, source, depth);
            Syntax::KeyValue {
                key: Box::new(key),
                value: Box::new(value),
            }
        }
        "index_expression" => Syntax::Index {
            operand: Box::new(field(node, "operand", source, depth)),
            indices: {
                let mut cursor = node.walk();
                let indices: Vec<Syntax> = node
                    .children_by_field_name("index", &mut cursor)
                    .map(|index| lower(index, source, depth + 1))
                    .collect();
                indices
            },
        },
        "slice_expression" => Syntax::SliceExpr {
            operand: Box::new(field(node, "operand", source, depth)),
            low: optional_field(node, "start", source, depth),
            high: optional_field(node, "end", source, depth),
            max: optional_field(node, "capacity", source, depth),
        },
        "type_assertion_expression" => Syntax::TypeAssert {
            operand: Box::new(field(node, "operand", source, depth)),
            ty: optional_field(node, "type", source, depth),
        },

        other => Syntax::Unknown(other.to_string()),
    }
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .map(|text| text.to_string())
        .unwrap_or_default()
}

// Helpers below take the depth of `node` and lower its children one level deeper

fn field(node: Node, name: &str, source: &str, depth: usize) -> Syntax {
    node.child_by_field_name(name)
        .map(|child| lower(child, source, depth + 1))
        .unwrap_or(Syntax::Missing)
}

fn optional_field(node: Node, name: &str, source: &str, depth: usize) -> Option<Box<Syntax>> {
    node.child_by_field_name(name)
        .map(|child| Box::new(lower(child, source, depth + 1)))
}

fn field_text(node: Node, name: &str, source: &str) -> String {
    node.child_by_field_name(name)
        .map(|child| node_text(child, source))
        .unwrap_or_default()
}

fn first_named(node: Node, source: &str, depth: usize) -> Syntax {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    child
        .map(|child| lower(child, source, depth + 1))
        .unwrap_or(Syntax::Missing)
}

fn named_children(node: Node, source: &str, depth: usize) -> Vec<Syntax> {
    let mut cursor = node.walk();
    let children: Vec<Syntax> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower(child, source, depth + 1))
        .collect();
    children
}

fn keyed_parts(node: Node, source: &str, depth: usize) -> (Syntax, Syntax) {
    if let (Some(key), Some(value)) = (
        node.child_by_field_name("key"),
        node.child_by_field_name("value"),
    ) {
        return (
            lower(key, source, depth + 1),
            lower(value, source, depth + 1),
        );
    }

    // Older grammars expose key and value only as positional children
    let mut parts = named_children(node, source, depth).into_iter();
    let key = parts.next().unwrap_or(Syntax::Missing);
    let value = parts.next().unwrap_or(Syntax::Missing);
    (key, value)
}

fn channel_direction(node: Node) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect();

    match tokens.as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

/// Types of a parameter list, one entry per declared name
fn parameter_types(list: Node, source: &str, depth: usize) -> Vec<Syntax> {
    let mut types = Vec::new();
    let mut cursor = list.walk();

    for param in list.named_children(&mut cursor) {
        match param.kind() {
            "parameter_declaration" => {
                let ty = field(param, "type", source, depth);
                let count = declared_name_count(param).max(1);
                types.extend(std::iter::repeat(ty).take(count));
            }
            "variadic_parameter_declaration" => {
                types.push(Syntax::Variadic(Box::new(field(param, "type", source, depth))));
            }
            "comment" => {}
            _ => types.push(lower(param, source, depth + 1)),
        }
    }

    types
}

/// Result types of a function: a bare type or a parenthesized parameter list
fn result_types(result: Node, source: &str, depth: usize) -> Vec<Syntax> {
    if result.kind() == "parameter_list" {
        parameter_types(result, source, depth)
    } else {
        vec![lower(result, source, depth + 1)]
    }
}

fn declared_name_count(param: Node) -> usize {
    let mut cursor = param.walk();
    let count = param.children_by_field_name("name", &mut cursor).count();
    count
}
