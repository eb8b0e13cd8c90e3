// PyO3 Bindings Module
//
// Python surface of the synthesis engine. Compiled only with the `python` feature.

mod api;
mod document;

// Re-export for lib.rs
pub use api::{hash_content, is_eligible, synthesize_repository};
pub use document::{PySynthesisOutcome, PySyntheticDocument};
