//! Version conflict detection.
//!
//! A module name is in conflict when the walk reaches it at more than one
//! version. Detection compares neighbouring entries of the name index, and
//! a confirmed conflict reports the paths of every entry under that name.

use std::collections::HashSet;

use super::dependency_graph::DependencyGraph;
use super::name_index::NameIndex;
use super::paths::{ModulePath, RecordedPaths};

/// Module names the Go toolchain emits as graph nodes without being modules.
pub const TOOLCHAIN_PSEUDO_MODULES: [&str; 2] = ["go", "toolchain"];

/// Information about a version conflict for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConflict {
    /// The bare module name with conflicting versions
    pub package_name: String,
    /// Distinct versions reached, in walk order
    pub versions: Vec<String>,
    /// Distinct root-to-module paths reaching any version of the module
    pub paths: Vec<ModulePath>,
}

impl VersionConflict {
    /// Returns a formatted string describing the conflict.
    ///
    /// For example: "golang.org/x/text has 2 versions: v0.3.7, v0.3.8"
    pub fn description(&self) -> String {
        format!(
            "{} has {} versions: {}",
            self.package_name,
            self.versions.len(),
            self.versions.join(", ")
        )
    }

    /// Returns each path rendered as `a -> b -> c`.
    pub fn rendered_paths(&self) -> Vec<String> {
        self.paths.iter().map(|path| path.join(" -> ")).collect()
    }

    /// Returns the number of recorded paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no path was recorded (should not happen).
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Conflicts found in one module graph, in first-reached order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    conflicts: Vec<VersionConflict>,
}

impl ConflictReport {
    /// Returns the conflicts.
    pub fn conflicts(&self) -> &[VersionConflict] {
        &self.conflicts
    }

    /// Consumes the report, returning the conflicts.
    pub fn into_conflicts(self) -> Vec<VersionConflict> {
        self.conflicts
    }

    /// Gets the conflict for a module name.
    pub fn get(&self, package_name: &str) -> Option<&VersionConflict> {
        self.conflicts
            .iter()
            .find(|c| c.package_name == package_name)
    }

    /// Returns the conflicting module names.
    pub fn package_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.conflicts.iter().map(|c| c.package_name.as_str())
    }

    /// Checks if any version conflicts exist.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Returns the number of conflicting module names.
    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Returns true if there are no conflicts.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Scans a [`NameIndex`] for names reached at several versions.
///
/// # Example
///
/// ```rust
/// use modconflict::graph::{ConflictDetector, DependencyGraph, NameIndex, PathMode, RecordedPaths};
///
/// let mut graph = DependencyGraph::new();
/// graph.add_edge("a@1", "b@1");
/// graph.add_edge("a@1", "b@2");
///
/// let paths = RecordedPaths::record(&graph, PathMode::LastVisit);
/// let index = NameIndex::build(&graph);
/// let report = ConflictDetector::new().detect(&graph, &index, &paths);
///
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.conflicts()[0].rendered_paths(), vec!["a@1 -> b@1", "a@1 -> b@2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    ignored: HashSet<String>,
}

impl ConflictDetector {
    /// Creates a detector that checks every name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips `name` when scanning.
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignored.insert(name.into());
        self
    }

    /// Skips every name in `names` when scanning.
    pub fn ignore_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Detects version conflicts.
    ///
    /// A name with two or more entries is in conflict when any two
    /// neighbouring entries differ. Its record then holds the paths of all
    /// entries, majority version included, each distinct path once.
    pub fn detect(
        &self,
        graph: &DependencyGraph,
        index: &NameIndex,
        paths: &RecordedPaths,
    ) -> ConflictReport {
        let mut conflicts = Vec::new();

        for (name, nodes) in index.iter() {
            if nodes.len() <= 1 || self.ignored.contains(name) {
                continue;
            }

            let has_conflict = nodes
                .windows(2)
                .any(|pair| graph.node(pair[0]).id != graph.node(pair[1]).id);
            if !has_conflict {
                continue;
            }

            let mut versions: Vec<String> = Vec::new();
            let mut conflict_paths: Vec<ModulePath> = Vec::new();
            for &idx in nodes {
                let version = &graph.node(idx).version;
                if !versions.contains(version) {
                    versions.push(version.clone());
                }
                for path in paths.all_paths(idx) {
                    if !conflict_paths.contains(path) {
                        conflict_paths.push(path.clone());
                    }
                }
            }

            tracing::debug!(module = name, versions = versions.len(), "version conflict");
            conflicts.push(VersionConflict {
                package_name: name.to_string(),
                versions,
                paths: conflict_paths,
            });
        }

        ConflictReport { conflicts }
    }
}
