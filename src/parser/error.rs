//! Errors raised while reading module graphs and manifests.

use std::path::PathBuf;

/// Errors that can occur while parsing `go mod graph` output or a go.mod file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The manifest file does not exist.
    #[error("cannot find {}, make sure you run inside the project path", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A graph line did not split into exactly two module identifiers.
    #[error("wrong format on line {line}: {content:?} (expected `<parent> <child>`)")]
    Format {
        /// 1-based line number in the graph text
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// The go.mod content is syntactically invalid.
    #[error("Invalid go.mod at line {line}: {message}")]
    InvalidManifest {
        /// 1-based line number in go.mod
        line: usize,
        /// What was wrong with it
        message: String,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
