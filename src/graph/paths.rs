//! Root-to-module path recording.
//!
//! A module reachable through several requirement chains is visited once
//! per chain. [`PathMode`] decides what survives those repeated visits.

use petgraph::graph::NodeIndex;
use std::collections::HashMap;

use super::dependency_graph::{DependencyGraph, WalkStats};

/// Ordered module identifiers from the root down to one module.
pub type ModulePath = Vec<String>;

/// How repeated visits to a module are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathMode {
    /// Each visit overwrites the stored path; the last chain walked wins.
    #[default]
    LastVisit,
    /// Every distinct chain reaching the module is kept, in walk order.
    AllPaths,
}

impl std::fmt::Display for PathMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastVisit => write!(f, "last-visit"),
            Self::AllPaths => write!(f, "all-paths"),
        }
    }
}

/// Paths recorded for every module reachable from the root.
///
/// # Example
///
/// ```rust
/// use modconflict::graph::{DependencyGraph, PathMode, RecordedPaths};
///
/// let mut graph = DependencyGraph::new();
/// graph.add_edge("a@1", "b@1");
/// graph.add_edge("b@1", "c@1");
///
/// let paths = RecordedPaths::record(&graph, PathMode::LastVisit);
/// let c = graph.index_of("c@1").unwrap();
/// assert_eq!(paths.path(c).unwrap().join(" -> "), "a@1 -> b@1 -> c@1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedPaths {
    mode: PathMode,
    paths: HashMap<NodeIndex, Vec<ModulePath>>,
    walk: WalkStats,
}

impl RecordedPaths {
    /// Walks `graph` from its root and records each module's path.
    ///
    /// A graph without a root records nothing.
    pub fn record(graph: &DependencyGraph, mode: PathMode) -> Self {
        let mut recorded = Self {
            mode,
            paths: HashMap::with_capacity(graph.node_count()),
            walk: WalkStats::default(),
        };

        let walk = graph.walk(|idx, chain| {
            let path: ModulePath = chain.iter().map(|&i| graph.node(i).id.clone()).collect();
            recorded.store(idx, path);
        });
        recorded.walk = walk;

        tracing::debug!(modules = recorded.len(), %mode, "recorded module paths");
        recorded
    }

    fn store(&mut self, idx: NodeIndex, path: ModulePath) {
        let entry = self.paths.entry(idx).or_default();
        match self.mode {
            PathMode::LastVisit => {
                entry.clear();
                entry.push(path);
            }
            PathMode::AllPaths => {
                if !entry.contains(&path) {
                    entry.push(path);
                }
            }
        }
    }

    /// Returns the counters of the walk that recorded the paths.
    pub fn walk_stats(&self) -> WalkStats {
        self.walk
    }

    /// Returns the mode the paths were recorded with.
    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// Returns the most recently recorded path of a module.
    pub fn path(&self, idx: NodeIndex) -> Option<&ModulePath> {
        self.paths.get(&idx).and_then(|paths| paths.last())
    }

    /// Returns every path recorded for a module.
    ///
    /// Holds at most one path in [`PathMode::LastVisit`]. Empty for modules
    /// not reachable from the root.
    pub fn all_paths(&self, idx: NodeIndex) -> &[ModulePath] {
        self.paths.get(&idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of modules with a recorded path.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
