//! Run-level errors for repository synthesis.
//!
//! Per-file problems never surface here: they are logged and recorded as
//! warnings on the outcome while the remaining files are processed.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole synthesis run.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Discovery found no analyzable Go source files.
    #[error("No Go source files found under {}", root.display())]
    NoFilesFound { root: PathBuf },

    /// The configured root is missing or not a directory.
    #[error("Invalid repository root {}: {reason}", root.display())]
    InvalidRoot { root: PathBuf, reason: String },

    /// Directory traversal failed.
    #[error("Failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Result alias for run-level operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_root() {
        let err = SynthesisError::NoFilesFound {
            root: PathBuf::from("/repos/empty"),
        };
        assert_eq!(err.to_string(), "No Go source files found under /repos/empty");

        let err = SynthesisError::InvalidRoot {
            root: PathBuf::from("/repos/missing"),
            reason: "not a directory".to_string(),
        };
        assert!(err.to_string().contains("not a directory"));
    }
}
