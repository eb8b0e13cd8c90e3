//! Construct Extractors Module
//!
//! Tree-sitter based extraction of Go declarations into the construct model.
//!
//! # Architecture
//!
//! - `base` - Construct model and the per-file BaseExtractor
//! - `manager` - ExtractorManager public API (read, parse, extract)
//! - `go` - Go extractor plus the syntax model and stringifier it renders with

pub mod base;
pub mod go;
pub mod manager;

// Re-export the public API
pub use base::{is_exported, Construct, ConstructKind, FileAnalysis};
pub use manager::ExtractorManager;
