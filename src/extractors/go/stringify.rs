//! Rendering of [`Syntax`] trees back into compact Go text.
//!
//! `stringify` is total: every variant has an arm, gaps render as
//! placeholders, and the result is never empty.

use super::syntax::{ChanDir, Syntax};

/// Composite literals with more elements than this collapse to `T{...}`
pub const COMPOSITE_ELEMENT_LIMIT: usize = 3;

const MISSING: &str = "<missing>";
const ELIDED: &str = "...";

/// Render a syntax tree as Go source text
pub fn stringify(syntax: &Syntax) -> String {
    match syntax {
        Syntax::Ident(text) | Syntax::Literal(text) | Syntax::Verbatim(text) => {
            non_empty(text)
        }
        Syntax::Pointer(pointee) => format!("*{}", stringify(pointee)),
        Syntax::Slice(elem) => format!("[]{}", stringify(elem)),
        Syntax::Array { len, elem } => format!("[{}]{}", stringify(len), stringify(elem)),
        Syntax::Map { key, value } => format!("map[{}]{}", stringify(key), stringify(value)),
        Syntax::Chan { dir, elem } => match dir {
            ChanDir::Recv => format!("<-chan {}", stringify(elem)),
            ChanDir::Send => format!("chan<- {}", stringify(elem)),
            ChanDir::Both => format!("chan {}", stringify(elem)),
        },
        Syntax::Func { params, results } => {
            let results: Vec<String> = results.iter().map(stringify).collect();
            format!("func({}){}", join(params), format_results(&results))
        }
        Syntax::Interface => "interface{}".to_string(),
        Syntax::Struct => "struct{}".to_string(),
        Syntax::Variadic(elem) => format!("...{}", stringify(elem)),
        Syntax::Spread(operand) => format!("{}...", stringify(operand)),
        Syntax::Selector { operand, field } => {
            format!("{}.{}", stringify(operand), non_empty(field))
        }
        Syntax::Binary { left, op, right } => format!(
            "{} {} {}",
            stringify(left),
            non_empty(op),
            stringify(right)
        ),
        Syntax::Unary { op, operand } => format!("{}{}", op, stringify(operand)),
        Syntax::Call { callee, args } => format!("{}({})", stringify(callee), join(args)),
        Syntax::Composite { ty, elems } => {
            let ty = ty.as_deref().map(stringify).unwrap_or_default();
            if elems.len() > COMPOSITE_ELEMENT_LIMIT {
                format!("{}{{...}}", ty)
            } else {
                format!("{}{{{}}}", ty, join(elems))
            }
        }
        Syntax::Index { operand, indices } => {
            format!("{}[{}]", stringify(operand), join(indices))
        }
        Syntax::SliceExpr {
            operand,
            low,
            high,
            max,
        } => {
            let bound = |part: &Option<Box<Syntax>>| {
                part.as_deref().map(stringify).unwrap_or_default()
            };
            match max {
                Some(max) => format!(
                    "{}[{}:{}:{}]",
                    stringify(operand),
                    bound(low),
                    bound(high),
                    stringify(max)
                ),
                None => format!("{}[{}:{}]", stringify(operand), bound(low), bound(high)),
            }
        }
        Syntax::TypeAssert { operand, ty } => {
            let ty = ty
                .as_deref()
                .map(stringify)
                .unwrap_or_else(|| "type".to_string());
            format!("{}.({})", stringify(operand), ty)
        }
        Syntax::Paren(inner) => format!("({})", stringify(inner)),
        Syntax::KeyValue { key, value } => format!("{}: {}", stringify(key), stringify(value)),
        Syntax::Elided => ELIDED.to_string(),
        Syntax::Missing => MISSING.to_string(),
        Syntax::Unknown(kind) if kind.is_empty() => "<unknown>".to_string(),
        Syntax::Unknown(kind) => format!("<{}>", kind),
    }
}

/// Result clause of a signature: nothing, ` T`, or ` (T1, T2)`
pub fn format_results(results: &[String]) -> String {
    match results {
        [] => String::new(),
        [single] => format!(" {}", single),
        many => format!(" ({})", many.join(", ")),
    }
}

fn join(items: &[Syntax]) -> String {
    items.iter().map(stringify).collect::<Vec<_>>().join(", ")
}

fn non_empty(text: &str) -> String {
    if text.is_empty() {
        MISSING.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Syntax {
        Syntax::Ident(name.to_string())
    }

    fn boxed(syntax: Syntax) -> Box<Syntax> {
        Box::new(syntax)
    }

    #[test]
    fn test_type_forms() {
        assert_eq!(stringify(&Syntax::Pointer(boxed(ident("User")))), "*User");
        assert_eq!(stringify(&Syntax::Slice(boxed(ident("byte")))), "[]byte");
        assert_eq!(
            stringify(&Syntax::Array {
                len: boxed(Syntax::Literal("4".to_string())),
                elem: boxed(ident("int")),
            }),
            "[4]int"
        );
        assert_eq!(
            stringify(&Syntax::Map {
                key: boxed(ident("string")),
                value: boxed(Syntax::Slice(boxed(ident("int")))),
            }),
            "map[string][]int"
        );
        assert_eq!(stringify(&Syntax::Interface), "interface{}");
        assert_eq!(
            stringify(&Syntax::Selector {
                operand: boxed(ident("http")),
                field: "Handler".to_string(),
            }),
            "http.Handler"
        );
    }

    #[test]
    fn test_channel_directions() {
        let chan = |dir| Syntax::Chan {
            dir,
            elem: boxed(ident("int")),
        };
        assert_eq!(stringify(&chan(ChanDir::Recv)), "<-chan int");
        assert_eq!(stringify(&chan(ChanDir::Send)), "chan<- int");
        assert_eq!(stringify(&chan(ChanDir::Both)), "chan int");
    }

    #[test]
    fn test_function_type_results() {
        let func = |results: Vec<Syntax>| Syntax::Func {
            params: vec![ident("int"), ident("string")],
            results,
        };
        assert_eq!(stringify(&func(vec![])), "func(int, string)");
        assert_eq!(stringify(&func(vec![ident("error")])), "func(int, string) error");
        assert_eq!(
            stringify(&func(vec![ident("bool"), ident("error")])),
            "func(int, string) (bool, error)"
        );
    }

    #[test]
    fn test_expressions() {
        assert_eq!(
            stringify(&Syntax::Binary {
                left: boxed(Syntax::Literal("1".to_string())),
                op: "<<".to_string(),
                right: boxed(Syntax::Literal("10".to_string())),
            }),
            "1 << 10"
        );
        assert_eq!(
            stringify(&Syntax::Unary {
                op: "&".to_string(),
                operand: boxed(ident("cfg")),
            }),
            "&cfg"
        );
        assert_eq!(
            stringify(&Syntax::Call {
                callee: boxed(Syntax::Selector {
                    operand: boxed(ident("errors")),
                    field: "New".to_string(),
                }),
                args: vec![Syntax::Literal("\"boom\"".to_string())],
            }),
            "errors.New(\"boom\")"
        );
        assert_eq!(
            stringify(&Syntax::TypeAssert {
                operand: boxed(ident("v")),
                ty: None,
            }),
            "v.(type)"
        );
        assert_eq!(
            stringify(&Syntax::SliceExpr {
                operand: boxed(ident("buf")),
                low: None,
                high: Some(boxed(ident("n"))),
                max: None,
            }),
            "buf[:n]"
        );
    }

    #[test]
    fn test_composite_literal_bound() {
        let literal = |count: usize| Syntax::Composite {
            ty: Some(boxed(Syntax::Slice(boxed(ident("int"))))),
            elems: (0..count)
                .map(|i| Syntax::Literal(i.to_string()))
                .collect(),
        };
        assert_eq!(stringify(&literal(0)), "[]int{}");
        assert_eq!(stringify(&literal(3)), "[]int{0, 1, 2}");
        assert_eq!(stringify(&literal(4)), "[]int{...}");
        assert_eq!(stringify(&literal(40)), "[]int{...}");
    }

    #[test]
    fn test_placeholders_for_gaps() {
        assert_eq!(stringify(&Syntax::Missing), "<missing>");
        assert_eq!(stringify(&ident("")), "<missing>");
        assert_eq!(
            stringify(&Syntax::Unknown("func_literal".to_string())),
            "<func_literal>"
        );
        assert_eq!(stringify(&Syntax::Unknown(String::new())), "<unknown>");
        assert_eq!(
            stringify(&Syntax::Binary {
                left: boxed(Syntax::Elided),
                op: "+".to_string(),
                right: boxed(Syntax::Literal("1".to_string())),
            }),
            "... + 1"
        );
        assert_eq!(
            stringify(&Syntax::Pointer(boxed(Syntax::Missing))),
            "*<missing>"
        );
    }

    /// Deterministic generator of arbitrary (often malformed) syntax graphs
    struct Generator(u64);

    impl Generator {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            self.0 >> 33
        }

        fn text(&mut self) -> String {
            match self.next() % 3 {
                0 => String::new(),
                1 => "x".to_string(),
                _ => "Value".to_string(),
            }
        }

        fn list(&mut self, depth: u32) -> Vec<Syntax> {
            (0..self.next() % 6).map(|_| self.syntax(depth + 1)).collect()
        }

        fn child(&mut self, depth: u32) -> Box<Syntax> {
            Box::new(self.syntax(depth + 1))
        }

        fn maybe(&mut self, depth: u32) -> Option<Box<Syntax>> {
            (self.next() % 2 == 0).then(|| self.child(depth))
        }

        fn syntax(&mut self, depth: u32) -> Syntax {
            if depth > 5 {
                return match self.next() % 3 {
                    0 => Syntax::Missing,
                    1 => Syntax::Ident(self.text()),
                    _ => Syntax::Unknown(self.text()),
                };
            }
            match self.next() % 26 {
                0 => Syntax::Ident(self.text()),
                1 => Syntax::Literal(self.text()),
                2 => Syntax::Verbatim(self.text()),
                3 => Syntax::Pointer(self.child(depth)),
                4 => Syntax::Slice(self.child(depth)),
                5 => Syntax::Array {
                    len: self.child(depth),
                    elem: self.child(depth),
                },
                6 => Syntax::Map {
                    key: self.child(depth),
                    value: self.child(depth),
                },
                7 => Syntax::Chan {
                    dir: ChanDir::Send,
                    elem: self.child(depth),
                },
                8 => Syntax::Func {
                    params: self.list(depth),
                    results: self.list(depth),
                },
                9 => Syntax::Interface,
                10 => Syntax::Struct,
                11 => Syntax::Variadic(self.child(depth)),
                12 => Syntax::Spread(self.child(depth)),
                13 => Syntax::Selector {
                    operand: self.child(depth),
                    field: self.text(),
                },
                14 => Syntax::Binary {
                    left: self.child(depth),
                    op: self.text(),
                    right: self.child(depth),
                },
                15 => Syntax::Unary {
                    op: self.text(),
                    operand: self.child(depth),
                },
                16 => Syntax::Call {
                    callee: self.child(depth),
                    args: self.list(depth),
                },
                17 => Syntax::Composite {
                    ty: self.maybe(depth),
                    elems: self.list(depth),
                },
                18 => Syntax::Index {
                    operand: self.child(depth),
                    indices: self.list(depth),
                },
                19 => Syntax::SliceExpr {
                    operand: self.child(depth),
                    low: self.maybe(depth),
                    high: self.maybe(depth),
                    max: self.maybe(depth),
                },
                20 => Syntax::TypeAssert {
                    operand: self.child(depth),
                    ty: self.maybe(depth),
                },
                21 => Syntax::Paren(self.child(depth)),
                22 => Syntax::KeyValue {
                    key: self.child(depth),
                    value: self.child(depth),
                },
                23 => Syntax::Missing,
                24 => Syntax::Elided,
                _ => Syntax::Unknown(self.text()),
            }
        }
    }

    #[test]
    fn test_stringify_is_total_on_generated_graphs() {
        let mut generator = Generator(0x5eed);
        for _ in 0..2_000 {
            let syntax = generator.syntax(0);
            let rendered = stringify(&syntax);
            assert!(
                !rendered.is_empty(),
                "stringify returned empty text for {:?}",
                syntax
            );
        }
    }
}
