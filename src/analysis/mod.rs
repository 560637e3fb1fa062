//! Conflict analysis pipeline.
//!
//! Runs the graph stages in order over one edge stream:
//!
//! - parse `go mod graph` text into edges (malformed lines abort here)
//! - build the [`DependencyGraph`]
//! - record root-to-module paths
//! - index reachable modules by bare name
//! - detect version conflicts and list dependency cycles
//!
//! and, separately, asks a [`ModuleSource`] why each conflicting module is
//! required.
//!
//! # Example
//!
//! ```
//! use modconflict::analysis::{Analysis, AnalysisOptions};
//!
//! let analysis = Analysis::from_graph_output("a@1 b@1\na@1 b@2\n", &AnalysisOptions::default()).unwrap();
//! assert_eq!(analysis.conflicts.len(), 1);
//! ```

use crate::graph::{
    ConflictDetector, ConflictReport, CycleInfo, DependencyGraph, NameIndex, PathMode,
    RecordedPaths, WalkStats, DEFAULT_VISIT_LIMIT, TOOLCHAIN_PSEUDO_MODULES,
};
use crate::parser::{parse_edges, Edge, ParseResult};
use crate::source::ModuleSource;

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How repeated visits to a shared module are recorded
    pub path_mode: PathMode,
    /// Bare module names excluded from conflict detection
    pub ignored: Vec<String>,
    /// How many times the walk may enter one module
    pub visit_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            path_mode: PathMode::default(),
            ignored: Vec::new(),
            visit_limit: DEFAULT_VISIT_LIMIT,
        }
    }
}

impl AnalysisOptions {
    /// Adds the `go` and `toolchain` pseudo-modules to the ignore list.
    pub fn ignore_toolchain(mut self) -> Self {
        for name in TOOLCHAIN_PSEUDO_MODULES {
            if !self.ignored.iter().any(|n| n == name) {
                self.ignored.push(name.to_string());
            }
        }
        self
    }
}

/// Results of every stage of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The module graph
    pub graph: DependencyGraph,
    /// Root-to-module paths
    pub paths: RecordedPaths,
    /// Reachable modules by bare name
    pub index: NameIndex,
    /// Detected version conflicts
    pub conflicts: ConflictReport,
    /// Dependency cycles present in the graph
    pub cycles: Vec<CycleInfo>,
    /// Counters of the path walk
    pub walk: WalkStats,
}

impl Analysis {
    /// Parses `go mod graph` output and analyzes it.
    ///
    /// Fails with [`crate::parser::ParseError::Format`] before any graph is
    /// built if a line is malformed.
    pub fn from_graph_output(content: &str, options: &AnalysisOptions) -> ParseResult<Self> {
        let edges = parse_edges(content)?;
        Ok(Self::from_edges(edges, options))
    }

    /// Analyzes an already parsed edge stream.
    pub fn from_edges<I>(edges: I, options: &AnalysisOptions) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let graph = DependencyGraph::from_edges(edges).with_visit_limit(options.visit_limit);
        let paths = RecordedPaths::record(&graph, options.path_mode);
        let index = NameIndex::build(&graph);
        let conflicts = ConflictDetector::new()
            .ignore_all(options.ignored.iter().cloned())
            .detect(&graph, &index, &paths);
        let cycles = graph.get_cycle_details();
        let walk = paths.walk_stats();

        if walk.is_truncated() {
            tracing::warn!(
                skipped = walk.truncated,
                limit = graph.visit_limit(),
                "module graph has too many paths; repeated visits were skipped"
            );
        }

        tracing::info!(
            modules = graph.node_count(),
            conflicts = conflicts.len(),
            cycles = cycles.len(),
            "analysis complete"
        );

        Self {
            graph,
            paths,
            index,
            conflicts,
            cycles,
            walk,
        }
    }

    /// Returns the identifier of the analyzed module, if the graph has a root.
    pub fn root_module(&self) -> Option<&str> {
        self.graph.root_node().map(|node| node.id.as_str())
    }
}

/// Why one conflicting module is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// The conflicting module name
    pub package_name: String,
    /// Explanation lines, empty when the query failed
    pub lines: Vec<String>,
    /// Error message when the query failed
    pub error: Option<String>,
}

/// Queries `source` once per conflicting module, in report order.
///
/// A failed query does not stop the others; its message is kept on the
/// corresponding [`Explanation`].
pub fn explain_conflicts<S>(source: &S, report: &ConflictReport) -> Vec<Explanation>
where
    S: ModuleSource + ?Sized,
{
    report
        .package_names()
        .map(|name| match source.why(name) {
            Ok(lines) => Explanation {
                package_name: name.to_string(),
                lines,
                error: None,
            },
            Err(e) => {
                tracing::warn!(module = name, error = %e, "why query failed");
                Explanation {
                    package_name: name.to_string(),
                    lines: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}
