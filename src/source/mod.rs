//! Module graph sources.
//!
//! The analysis never calls the Go toolchain directly. It asks a
//! [`ModuleSource`] for the raw module graph and for the explanation of why
//! a module is required, so tests can feed synthetic graphs.
//!
//! # Example
//!
//! ```ignore
//! use modconflict::source::{GoCli, ModuleSource};
//!
//! let go = GoCli::new("go");
//! let graph_text = go.module_graph()?;
//! for line in go.why("golang.org/x/text")? {
//!     println!("\t{}", line);
//! }
//! ```

mod go;

pub use go::{parse_why_output, GoCli};

use std::process::ExitStatus;

/// Errors raised while querying a module source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The command could not be started at all.
    #[error("cannot execute {program}: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        /// Full command line
        command: String,
        /// Exit status
        status: ExitStatus,
        /// Trimmed standard error output
        stderr: String,
    },

    /// Reading a graph from a file or stdin failed.
    #[error("Failed to read module graph: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for module source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies module graph data to the analysis.
pub trait ModuleSource {
    /// Returns the module graph as `<parent> <child>` lines.
    fn module_graph(&self) -> SourceResult<String>;

    /// Returns the chain of modules explaining why `module` is required.
    fn why(&self, module: &str) -> SourceResult<Vec<String>>;
}
