// API Functions - PyO3-exposed functions for Python
//
// Thin wrappers over the engine; the GIL is released while Rust walks and parses.

use super::PySynthesisOutcome;
use crate::engine::{self, SynthesisConfig};
use crate::error::SynthesisError;
use pyo3::exceptions::{PyFileNotFoundError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

/// Check whether a directory should be indexed as a Go project
///
/// Args:
///     root_path (str): Repository root directory
///
/// Returns:
///     bool: True if a go.mod/go.work exists or at least 3 non-test .go files were found
#[pyfunction]
#[pyo3(signature = (root_path))]
pub fn is_eligible(py: Python<'_>, root_path: PathBuf) -> bool {
    py.detach(move || crate::eligibility::is_eligible(&root_path))
}

/// Synthesize the Go constructs document for a repository
///
/// Args:
///     root_path (str): Repository root directory
///     exclude_patterns (list[str]): Glob or simple patterns removing files
///     include_patterns (list[str]): When non-empty, only matching files are analyzed
///     include_non_exported (bool): Render lowercase constructs too
///
/// Returns:
///     SynthesisOutcome: The document record and per-file warnings
///
/// Raises:
///     FileNotFoundError: If no Go files were found
///     ValueError: If root_path is not a directory
///     RuntimeError: If the directory walk failed
#[pyfunction]
#[pyo3(signature = (root_path, exclude_patterns=Vec::new(), include_patterns=Vec::new(), include_non_exported=false))]
pub fn synthesize_repository(
    py: Python<'_>,
    root_path: PathBuf,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    include_non_exported: bool,
) -> PyResult<PySynthesisOutcome> {
    let config = SynthesisConfig {
        root_path,
        exclude_patterns,
        include_patterns,
        include_non_exported,
    };

    let outcome = py.detach(move || engine::synthesize(&config));

    match outcome {
        Ok(outcome) => Ok(outcome.into()),
        Err(e @ SynthesisError::NoFilesFound { .. }) => {
            Err(PyFileNotFoundError::new_err(e.to_string()))
        }
        Err(e @ SynthesisError::InvalidRoot { .. }) => Err(PyValueError::new_err(e.to_string())),
        Err(e @ SynthesisError::Walk { .. }) => Err(PyRuntimeError::new_err(e.to_string())),
    }
}

/// Compute blake3 hash of content string
///
/// Args:
///     content (str): Content to hash
///
/// Returns:
///     str: 64-character hex digest of blake3 hash
#[pyfunction]
pub fn hash_content(content: &str) -> String {
    crate::utils::hash_content(content)
}
