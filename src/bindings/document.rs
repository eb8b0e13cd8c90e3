// PySyntheticDocument - Python wrapper for the synthesized output record

use crate::engine::{SynthesisOutcome, SyntheticDocument};
use pyo3::prelude::*;
use std::collections::BTreeMap;

/// The single `__go_constructs__.md` record produced by a run
#[pyclass(name = "SyntheticDocument")]
#[derive(Clone)]
pub struct PySyntheticDocument {
    #[pyo3(get)]
    pub path: String,

    #[pyo3(get)]
    pub content: String,

    #[pyo3(get)]
    pub hash: String,

    #[pyo3(get)]
    pub size: usize,

    #[pyo3(get)]
    pub language: String,

    #[pyo3(get)]
    pub metadata: BTreeMap<String, usize>,
}

#[pymethods]
impl PySyntheticDocument {
    fn __repr__(&self) -> String {
        format!(
            "SyntheticDocument(path='{}', size={}, hash='{}')",
            self.path, self.size, self.hash
        )
    }
}

impl From<SyntheticDocument> for PySyntheticDocument {
    fn from(document: SyntheticDocument) -> Self {
        PySyntheticDocument {
            path: document.path,
            content: document.content,
            hash: document.hash,
            size: document.size,
            language: document.language,
            metadata: document.metadata,
        }
    }
}

/// Document plus the per-file warnings collected during the run
#[pyclass(name = "SynthesisOutcome")]
pub struct PySynthesisOutcome {
    #[pyo3(get)]
    pub document: PySyntheticDocument,

    #[pyo3(get)]
    pub warnings: Vec<String>,
}

#[pymethods]
impl PySynthesisOutcome {
    fn __repr__(&self) -> String {
        format!(
            "SynthesisOutcome(path='{}', warnings={})",
            self.document.path,
            self.warnings.len()
        )
    }
}

impl From<SynthesisOutcome> for PySynthesisOutcome {
    fn from(outcome: SynthesisOutcome) -> Self {
        PySynthesisOutcome {
            document: outcome.document.into(),
            warnings: outcome.warnings,
        }
    }
}
