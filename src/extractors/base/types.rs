// Base Extractor Types for gosynth
//
// Data structures shared by the Go extractor, the aggregator, and the synthesizer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of an extracted declaration
///
/// Declaration order is the rendering priority order: deriving `Ord` lets
/// `BTreeMap<ConstructKind, _>` iterate in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructKind {
    Const,
    Var,
    Type,
    Struct,
    Interface,
    Func,
    Method,
}

impl ConstructKind {
    /// All kinds in rendering priority order
    pub const ORDERED: [ConstructKind; 7] = [
        ConstructKind::Const,
        ConstructKind::Var,
        ConstructKind::Type,
        ConstructKind::Struct,
        ConstructKind::Interface,
        ConstructKind::Func,
        ConstructKind::Method,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::Const => "const",
            ConstructKind::Var => "var",
            ConstructKind::Type => "type",
            ConstructKind::Struct => "struct",
            ConstructKind::Interface => "interface",
            ConstructKind::Func => "func",
            ConstructKind::Method => "method",
        }
    }

    /// Kinds rendered with an indented body block
    pub fn has_body(&self) -> bool {
        matches!(self, ConstructKind::Struct | ConstructKind::Interface)
    }
}

impl std::fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted Go declaration with its reconstructed signature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Construct {
    pub kind: ConstructKind,
    /// Declared identifier
    pub name: String,
    /// Reconstructed one-line signature (`func (u *User) Name() string`)
    pub signature: String,
    pub package_name: String,
    /// Relative Unix-style path of the declaring file
    pub file_path: String,
    /// 1-based line of the declaration
    pub line: u32,
    /// First character is uppercase (Go export rule)
    pub exported: bool,
    /// Stringified receiver type, present only for methods
    pub receiver_type: Option<String>,
    pub parameters: Vec<String>,
    pub returns: Vec<String>,
    /// Struct fields in declaration order
    pub fields: Vec<String>,
    /// Interface method elements in declaration order
    pub methods: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

impl Construct {
    /// Location comment target, `file:line`
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_path, self.line)
    }

    /// Body lines rendered under the signature (struct fields or interface methods)
    pub fn body(&self) -> &[String] {
        match self.kind {
            ConstructKind::Struct => &self.fields,
            ConstructKind::Interface => &self.methods,
            _ => &[],
        }
    }
}

/// Options for creating constructs - everything beyond name, kind and position
#[derive(Debug, Clone, Default)]
pub struct ConstructOptions {
    pub signature: String,
    pub receiver_type: Option<String>,
    pub parameters: Vec<String>,
    pub returns: Vec<String>,
    pub fields: Vec<String>,
    pub methods: Vec<String>,
    pub metadata: BTreeMap<String, String>,
}

/// All constructs extracted from one successfully parsed file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileAnalysis {
    pub file_path: String,
    pub package_name: String,
    pub constructs: Vec<Construct>,
}

/// Go export rule: an identifier is exported iff its first character is uppercase
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_matches_priority() {
        let mut kinds = vec![
            ConstructKind::Method,
            ConstructKind::Const,
            ConstructKind::Struct,
            ConstructKind::Func,
            ConstructKind::Var,
            ConstructKind::Interface,
            ConstructKind::Type,
        ];
        kinds.sort();
        assert_eq!(kinds, ConstructKind::ORDERED.to_vec());
    }

    #[test]
    fn test_kind_display() {
        let rendered: Vec<String> = ConstructKind::ORDERED
            .iter()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["const", "var", "type", "struct", "interface", "func", "method"]
        );
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("Version"));
        assert!(is_exported("Ünicode"));
        assert!(!is_exported("main"));
        assert!(!is_exported("_Hidden"));
        assert!(!is_exported(""));
    }
}
