// Base Extractor Types for gosynth
//
// - types.rs: construct model (Construct, ConstructKind, FileAnalysis)
// - extractor.rs: BaseExtractor per-file state and node helpers

pub mod extractor;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{is_exported, Construct, ConstructKind, ConstructOptions, FileAnalysis};
