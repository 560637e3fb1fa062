//! Graph module for module requirement modeling.
//!
//! This module builds a [`DependencyGraph`] from `go mod graph` edges and
//! runs the analysis stages over it, each taking the previous stage's
//! output explicitly:
//!
//! 1. [`RecordedPaths`] - root-to-module paths
//! 2. [`NameIndex`] - reachable modules grouped by bare name
//! 3. [`ConflictDetector`] - names reached at more than one version
//!
//! # Example
//!
//! ```rust
//! use modconflict::graph::{ConflictDetector, DependencyGraph, NameIndex, PathMode, RecordedPaths};
//! use modconflict::parser::parse_edges;
//!
//! let edges = parse_edges("a@1 b@1\nb@1 c@1\na@1 c@2\n").unwrap();
//! let graph = DependencyGraph::from_edges(edges);
//! let paths = RecordedPaths::record(&graph, PathMode::LastVisit);
//! let index = NameIndex::build(&graph);
//! let report = ConflictDetector::new().detect(&graph, &index, &paths);
//!
//! assert_eq!(report.package_names().collect::<Vec<_>>(), vec!["c"]);
//! ```

mod conflict;
mod dependency_graph;
mod name_index;
mod paths;

pub use conflict::{ConflictDetector, ConflictReport, VersionConflict, TOOLCHAIN_PSEUDO_MODULES};
pub use dependency_graph::{CycleInfo, DependencyGraph, ModuleNode, WalkStats, DEFAULT_VISIT_LIMIT};
pub use name_index::NameIndex;
pub use paths::{ModulePath, PathMode, RecordedPaths};
