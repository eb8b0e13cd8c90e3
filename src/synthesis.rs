//! Document Synthesizer - renders aggregated constructs into one canonical
//! markdown document.
//!
//! Section order is fixed: preamble, notes, directory listing, one section per
//! file, one section per package. Every iteration goes through sorted
//! collections so identical inputs always produce identical bytes.

use crate::analysis::PackageAnalysis;
use crate::extractors::base::{Construct, ConstructKind, FileAnalysis};
use crate::utils::hash_content;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PREAMBLE: &str = "\
# Go Constructs

This document is a structural summary of a Go repository, generated from its
syntax trees. It lists the declarations each file and package contains:
constants, variables, types, structs, interfaces, functions and methods.

Format:
- Constructs are grouped by kind in the order const, var, type, struct,
  interface, func, method, and sorted by name within each kind.
- Each construct is shown as a reconstructed Go signature. Structs and
  interfaces include their fields or method sets.
- The comment after each construct gives its source location as `file:line`.

Usage guidelines:
- Signatures are a readable approximation of the source and may elide
  expressions (`T{...}`, `<func_literal>`). Consult the file for exact code.
- Types are shown as written; no type checking or cross-package resolution
  has been performed.
";

/// Which constructs reach the rendered sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only constructs whose name starts with an uppercase letter
    ExportedOnly,
    /// Every extracted construct
    All,
}

impl Visibility {
    pub fn from_include_non_exported(include_non_exported: bool) -> Self {
        if include_non_exported {
            Visibility::All
        } else {
            Visibility::ExportedOnly
        }
    }

    pub fn includes_non_exported(self) -> bool {
        self == Visibility::All
    }

    fn admits(self, construct: &Construct) -> bool {
        construct.exported || self.includes_non_exported()
    }

    fn label(self) -> &'static str {
        match self {
            Visibility::ExportedOnly => "exported constructs only",
            Visibility::All => "all constructs (exported and non-exported)",
        }
    }
}

/// Immutable synthesized artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    /// blake3 hex digest of `content`
    pub hash: String,
    /// Byte length of `content`
    pub size: usize,
    pub metadata: BTreeMap<String, usize>,
}

impl Document {
    fn new(content: String, metadata: BTreeMap<String, usize>) -> Self {
        Self {
            hash: hash_content(&content),
            size: content.len(),
            content,
            metadata,
        }
    }
}

pub struct DocumentSynthesizer {
    visibility: Visibility,
}

impl DocumentSynthesizer {
    pub fn new(visibility: Visibility) -> Self {
        Self { visibility }
    }

    /// Render the document for a set of analyzed files and their packages
    pub fn synthesize(
        &self,
        files: &[FileAnalysis],
        packages: &BTreeMap<String, PackageAnalysis>,
    ) -> Document {
        let mut sorted_files: Vec<&FileAnalysis> = files.iter().collect();
        sorted_files.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        let mut content = String::from(PREAMBLE);
        self.render_notes(&mut content);
        render_directory_listing(&mut content, &sorted_files);
        for file in &sorted_files {
            self.render_file_section(&mut content, file);
        }
        for package in packages.values() {
            self.render_package_section(&mut content, package);
        }

        Document::new(content, build_metadata(&sorted_files, packages))
    }

    fn render_notes(&self, out: &mut String) {
        out.push_str("\n## Notes\n\n");
        out.push_str(&format!("- Visibility: {}.\n", self.visibility.label()));
        if !self.visibility.includes_non_exported() {
            out.push_str("- Non-exported (lowercase) constructs are omitted.\n");
        }
        out.push_str("- Test files (`_test.go`) and vendored code are not analyzed.\n");
    }

    fn render_file_section(&self, out: &mut String, file: &FileAnalysis) {
        let mut by_kind: BTreeMap<ConstructKind, Vec<&Construct>> = BTreeMap::new();
        for construct in file.constructs.iter().filter(|c| self.visibility.admits(c)) {
            by_kind.entry(construct.kind).or_default().push(construct);
        }
        if by_kind.is_empty() {
            return;
        }

        out.push_str(&format!("\n## File: {}\n\n", file.file_path));
        out.push_str(&format!("Package: `{}`\n", file.package_name));
        render_kinds(out, by_kind);
    }

    fn render_package_section(&self, out: &mut String, package: &PackageAnalysis) {
        let view = package.view(self.visibility.includes_non_exported());
        let by_kind: BTreeMap<ConstructKind, Vec<&Construct>> = view
            .iter()
            .filter(|(_, constructs)| !constructs.is_empty())
            .map(|(kind, constructs)| (*kind, constructs.iter().collect()))
            .collect();
        if by_kind.is_empty() {
            return;
        }

        out.push_str(&format!(
            "\n## Package: {} ({})\n\n",
            package.package_name, package.path
        ));
        out.push_str(&format!(
            "<!-- view: {}; files: {} -->\n",
            self.visibility.label(),
            package.files.len()
        ));
        render_kinds(out, by_kind);
    }
}

fn render_directory_listing(out: &mut String, files: &[&FileAnalysis]) {
    let mut listing = String::new();
    for file in files {
        listing.push_str(&file.file_path);
        listing.push('\n');
    }

    out.push_str("\n## Directory\n\n");
    push_fenced(out, "text", &listing);
}

/// Fence `body` with more backticks than any run inside it
///
/// String literals and struct tags may themselves contain ``` runs.
fn push_fenced(out: &mut String, info: &str, body: &str) {
    let fence = "`".repeat(longest_backtick_run(body).max(2) + 1);
    out.push_str(&fence);
    out.push_str(info);
    out.push('\n');
    out.push_str(body);
    out.push_str(&fence);
    out.push('\n');
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c: char| c != '`').map(str::len).max().unwrap_or(0)
}

/// One fenced block per kind, kinds in priority order (the map's key order)
fn render_kinds(out: &mut String, by_kind: BTreeMap<ConstructKind, Vec<&Construct>>) {
    for (kind, mut constructs) in by_kind {
        constructs.sort_by(|a, b| {
            (&a.name, &a.file_path, a.line).cmp(&(&b.name, &b.file_path, b.line))
        });

        let mut block = String::new();
        for (index, construct) in constructs.iter().enumerate() {
            if index > 0 {
                block.push('\n');
            }
            render_construct(&mut block, construct);
        }

        out.push_str(&format!("\n### {}\n\n", kind));
        push_fenced(out, "go", &block);
    }
}

fn render_construct(out: &mut String, construct: &Construct) {
    out.push_str(&construct.signature);
    if construct.kind.has_body() {
        let body = construct.body();
        if body.is_empty() {
            out.push_str(" {}\n");
        } else {
            out.push_str(" {\n");
            for line in body {
                out.push('\t');
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("}\n");
        }
    } else {
        out.push('\n');
    }
    out.push_str(&format!("// {}\n", construct.location()));
}

fn build_metadata(
    files: &[&FileAnalysis],
    packages: &BTreeMap<String, PackageAnalysis>,
) -> BTreeMap<String, usize> {
    let constructs = files.iter().flat_map(|file| file.constructs.iter());

    let mut metadata = BTreeMap::new();
    metadata.insert("file_count".to_string(), files.len());
    metadata.insert("package_count".to_string(), packages.len());
    for kind in ConstructKind::ORDERED {
        metadata.insert(format!("{}_count", kind), 0);
    }

    let mut construct_count = 0;
    let mut exported_count = 0;
    for construct in constructs {
        construct_count += 1;
        if construct.exported {
            exported_count += 1;
        }
        *metadata.entry(format!("{}_count", construct.kind)).or_insert(0) += 1;
    }
    metadata.insert("construct_count".to_string(), construct_count);
    metadata.insert("exported_count".to_string(), exported_count);
    metadata
}
