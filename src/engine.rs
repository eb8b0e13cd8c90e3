// Synthesis engine - the input/output contract for indexing drivers
//
// One run: discover files, parse and extract them in parallel, aggregate by
// package, render the document, and wrap it in a single output record.
// Per-file failures are logged and kept as warnings; only an empty discovery
// (or an unusable root) fails the run.

use crate::analysis::aggregate_packages;
use crate::discovery::discover_go_files;
use crate::eligibility::is_eligible;
use crate::error::{SynthesisError, SynthesisResult};
use crate::extractors::base::FileAnalysis;
use crate::extractors::ExtractorManager;
use crate::synthesis::{Document, DocumentSynthesizer, Visibility};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// Sentinel path of the synthesized record
pub const DOCUMENT_PATH: &str = "__go_constructs__.md";

/// Language tag identifying the document format
pub const DOCUMENT_LANGUAGE: &str = "go-constructs";

/// Driver-supplied run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SynthesisConfig {
    pub root_path: PathBuf,
    /// Patterns removing files from the run
    pub exclude_patterns: Vec<String>,
    /// When non-empty, only matching files are analyzed
    pub include_patterns: Vec<String>,
    pub include_non_exported: bool,
}

impl SynthesisConfig {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Default::default()
        }
    }

    /// Parse a driver-supplied JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_include_non_exported(self.include_non_exported)
    }
}

/// The single record handed to storage and serving collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticDocument {
    pub path: String,
    pub content: String,
    pub hash: String,
    pub size: usize,
    pub language: String,
    pub metadata: BTreeMap<String, usize>,
}

impl From<Document> for SyntheticDocument {
    fn from(document: Document) -> Self {
        Self {
            path: DOCUMENT_PATH.to_string(),
            content: document.content,
            hash: document.hash,
            size: document.size,
            language: DOCUMENT_LANGUAGE.to_string(),
            metadata: document.metadata,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOutcome {
    pub document: SyntheticDocument,
    /// One message per file that could not be read or parsed
    pub warnings: Vec<String>,
}

/// Result of [`index_repository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// Not a Go project; the driver should use its fallback path
    Ineligible,
    Synthesized(SynthesisOutcome),
}

/// Synthesize the constructs document for `config.root_path`
///
/// Does not check eligibility; see [`index_repository`].
pub fn synthesize(config: &SynthesisConfig) -> SynthesisResult<SynthesisOutcome> {
    let root = config.root_path.as_path();
    let files = discover_go_files(root, &config.include_patterns, &config.exclude_patterns)?;
    if files.is_empty() {
        return Err(SynthesisError::NoFilesFound {
            root: root.to_path_buf(),
        });
    }

    // collect() keeps the sorted discovery order
    let results: Vec<(String, anyhow::Result<FileAnalysis>)> = files
        .par_iter()
        .map(|file_path| {
            let manager = ExtractorManager::new();
            (file_path.clone(), manager.analyze_path(file_path, root))
        })
        .collect();

    let mut analyses = Vec::with_capacity(results.len());
    let mut warnings = Vec::new();
    for (file_path, result) in results {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => {
                warn!("Skipping {}: {:#}", file_path, e);
                warnings.push(format!("{}: {:#}", file_path, e));
            }
        }
    }

    let packages = aggregate_packages(&analyses);
    let synthesizer = DocumentSynthesizer::new(config.visibility());
    let document = synthesizer.synthesize(&analyses, &packages);

    info!(
        "Synthesized {} ({} bytes) from {} files in {} packages, {} skipped",
        DOCUMENT_PATH,
        document.size,
        analyses.len(),
        packages.len(),
        warnings.len()
    );

    Ok(SynthesisOutcome {
        document: document.into(),
        warnings,
    })
}

/// Check eligibility, then synthesize
pub fn index_repository(config: &SynthesisConfig) -> SynthesisResult<IndexOutcome> {
    if !is_eligible(&config.root_path) {
        info!(
            "{} is not a Go project, leaving it to the fallback path",
            config.root_path.display()
        );
        return Ok(IndexOutcome::Ineligible);
    }
    synthesize(config).map(IndexOutcome::Synthesized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn sample_repo() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "go.mod", "module example.com/shop\n\ngo 1.22\n");
        write(
            root,
            "main.go",
            "package main\n\nconst Version = \"1.0.0\"\n\nfunc main() {}\n",
        );
        write(
            root,
            "orders/order.go",
            "package orders\n\ntype Order struct {\n\tID    int\n\tTotal float64\n}\n\nfunc (o *Order) Paid() bool { return true }\n",
        );
        write(
            root,
            "orders/store.go",
            "package orders\n\ntype Store interface {\n\tSave(o *Order) error\n}\n\nvar defaultStore Store\n",
        );
        write(root, "orders/order_test.go", "package orders\n\nfunc TestX() {}\n");
        temp_dir
    }

    #[test]
    fn test_synthesize_produces_single_record() {
        let repo = sample_repo();
        let outcome = synthesize(&SynthesisConfig::new(repo.path())).unwrap();
        let document = &outcome.document;

        assert_eq!(document.path, DOCUMENT_PATH);
        assert_eq!(document.language, DOCUMENT_LANGUAGE);
        assert_eq!(document.size, document.content.len());
        assert_eq!(document.hash, crate::utils::hash_content(&document.content));
        assert_eq!(document.metadata["file_count"], 3);
        assert_eq!(document.metadata["package_count"], 2);
        assert!(outcome.warnings.is_empty());

        assert!(document.content.contains("## File: orders/order.go"));
        assert!(document.content.contains("func (o *Order) Paid() bool"));
        assert!(document.content.contains("Save(o *Order) error"));
        assert!(!document.content.contains("order_test.go"));
        assert!(!document.content.contains("defaultStore"));
    }

    #[test]
    fn test_broken_file_is_skipped_with_warning() {
        let repo = sample_repo();
        write(repo.path(), "orders/broken.go", "package orders\n\nfunc Broken( {\n");

        let outcome = synthesize(&SynthesisConfig::new(repo.path())).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].starts_with("orders/broken.go:"));
        let content = &outcome.document.content;
        assert!(!content.contains("broken.go"));
        assert!(content.contains("## File: orders/order.go"));
        assert!(content.contains("## File: main.go"));
        assert_eq!(outcome.document.metadata["file_count"], 3);
    }

    #[test]
    fn test_long_generated_expression_does_not_abort_run() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "go.mod", "module example.com/gen\n");
        let chain = vec!["1"; 10_000].join(" + ");
        write(
            temp_dir.path(),
            "a.go",
            &format!("package gen\n\nvar X = {}\n", chain),
        );
        write(temp_dir.path(), "b.go", "package gen\n\nfunc B() {}\n");

        let outcome = synthesize(&SynthesisConfig::new(temp_dir.path())).unwrap();
        let content = &outcome.document.content;

        assert!(outcome.warnings.is_empty());
        assert!(content.contains("## File: b.go"));
        assert!(content.contains("func B()"));
        assert!(content.contains("var X = ... + 1 + 1"));
    }

    #[test]
    fn test_no_files_found() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "go.mod", "module example.com/empty\n");
        write(temp_dir.path(), "vendor/dep/dep.go", "package dep\n");

        let err = synthesize(&SynthesisConfig::new(temp_dir.path())).unwrap_err();
        assert!(matches!(err, SynthesisError::NoFilesFound { .. }));
    }

    #[test]
    fn test_excluding_everything_is_no_files_found() {
        let repo = sample_repo();
        let config = SynthesisConfig {
            exclude_patterns: vec!["*.go".to_string()],
            ..SynthesisConfig::new(repo.path())
        };
        assert!(matches!(
            synthesize(&config),
            Err(SynthesisError::NoFilesFound { .. })
        ));
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let repo = sample_repo();
        let config = SynthesisConfig {
            include_non_exported: true,
            ..SynthesisConfig::new(repo.path())
        };
        let first = synthesize(&config).unwrap();
        let second = synthesize(&config).unwrap();
        assert_eq!(first.document, second.document);
        assert!(first.document.content.contains("var defaultStore Store"));
        assert!(first.document.content.contains("func main()"));
    }

    #[test]
    fn test_index_repository_respects_eligibility() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.go", "package a\n\nfunc A() {}\n");
        write(temp_dir.path(), "b.go", "package a\n\nfunc B() {}\n");

        let config = SynthesisConfig::new(temp_dir.path());
        assert_eq!(index_repository(&config).unwrap(), IndexOutcome::Ineligible);

        write(temp_dir.path(), "go.mod", "module example.com/a\n");
        match index_repository(&config).unwrap() {
            IndexOutcome::Synthesized(outcome) => {
                assert!(outcome.document.content.contains("func A()"));
                assert!(outcome.document.content.contains("func B()"));
            }
            IndexOutcome::Ineligible => panic!("manifest should make the repository eligible"),
        }
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config =
            SynthesisConfig::from_json(r#"{"root_path": "/srv/repo", "include_non_exported": true}"#)
                .unwrap();
        assert_eq!(config.root_path, PathBuf::from("/srv/repo"));
        assert!(config.exclude_patterns.is_empty());
        assert_eq!(config.visibility(), Visibility::All);
    }
}
