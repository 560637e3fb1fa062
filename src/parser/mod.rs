//! Parser module for modconflict.
//!
//! This module turns the text produced by the Go toolchain into typed data:
//!
//! - **`go mod graph` output** - one `<parent> <child>` edge per line
//! - **go.mod** - module path, go/toolchain directives, requirements,
//!   replacements and exclusions
//!
//! # Example
//!
//! ```
//! use modconflict::parser::{parse_edges, split_identifier};
//!
//! let edges = parse_edges("example.com/app golang.org/x/text@v0.3.7\n").unwrap();
//! let (name, version) = split_identifier(&edges[0].child);
//!
//! assert_eq!(name, "golang.org/x/text");
//! assert_eq!(version, "v0.3.7");
//! ```

pub mod edges;
pub mod error;
pub mod go_mod;
pub mod types;

// Re-export commonly used types for convenience
pub use edges::parse_edges;
pub use error::{ParseError, ParseResult};
pub use go_mod::GO_MOD_FILE;
pub use types::{split_identifier, Edge, GoMod, Replacement, Requirement};
