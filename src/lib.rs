// gosynth Core - Go construct extraction and document synthesis
//
// Walks a Go repository, extracts top-level declarations with tree-sitter, and
// renders them into one deterministic markdown document for indexing drivers.
// The optional `python` feature builds a PyO3 extension module around the engine.

pub mod analysis;
pub mod discovery;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod language;
pub mod synthesis;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use analysis::{aggregate_packages, PackageAnalysis};
pub use eligibility::{is_eligible, MIN_SOURCE_FILES};
pub use engine::{
    index_repository, synthesize, IndexOutcome, SynthesisConfig, SynthesisOutcome,
    SyntheticDocument, DOCUMENT_LANGUAGE, DOCUMENT_PATH,
};
pub use error::{SynthesisError, SynthesisResult};
pub use extractors::{Construct, ConstructKind, ExtractorManager, FileAnalysis};
pub use synthesis::{Document, DocumentSynthesizer, Visibility};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// gosynth Core Python module
///
/// Exposes eligibility detection and document synthesis for Go repositories.
#[cfg(feature = "python")]
#[pymodule]
fn gosynth_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::is_eligible, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::synthesize_repository, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::hash_content, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PySyntheticDocument>()?;
    m.add_class::<bindings::PySynthesisOutcome>()?;

    Ok(())
}
