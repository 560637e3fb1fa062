//! Grouping of reachable modules by bare name.

use petgraph::graph::NodeIndex;
use std::collections::HashMap;

use super::dependency_graph::DependencyGraph;

/// Modules reachable from the root, grouped by bare module name.
///
/// Each name maps to its nodes in walk order. A node reached through
/// several chains is listed once per chain, up to the graph's visit limit,
/// so the same index can appear more than once. Names iterate in the order they were first reached.
///
/// # Example
///
/// ```rust
/// use modconflict::graph::{DependencyGraph, NameIndex};
///
/// let mut graph = DependencyGraph::new();
/// graph.add_edge("app", "lib@v1");
/// graph.add_edge("app", "lib@v2");
///
/// let index = NameIndex::build(&graph);
/// assert_eq!(index.get("lib").len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    order: Vec<String>,
    entries: HashMap<String, Vec<NodeIndex>>,
}

impl NameIndex {
    /// Walks `graph` from its root and groups every visit by bare name.
    pub fn build(graph: &DependencyGraph) -> Self {
        let mut index = Self::default();

        graph.walk(|idx, _| {
            let name = &graph.node(idx).name;
            match index.entries.get_mut(name) {
                Some(nodes) => nodes.push(idx),
                None => {
                    index.order.push(name.clone());
                    index.entries.insert(name.clone(), vec![idx]);
                }
            }
        });

        tracing::debug!(names = index.len(), "indexed modules by name");
        index
    }

    /// Returns the nodes recorded under `name`, empty if none.
    pub fn get(&self, name: &str) -> &[NodeIndex] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates names with their nodes, in first-reached order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NodeIndex])> + '_ {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.get(name)))
    }

    /// Returns the bare names in first-reached order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no module was reached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Edge;

    fn ids<'a>(graph: &'a DependencyGraph, nodes: &[NodeIndex]) -> Vec<&'a str> {
        nodes.iter().map(|&idx| graph.node(idx).id.as_str()).collect()
    }

    #[test]
    fn test_build_empty_graph() {
        let index = NameIndex::build(&DependencyGraph::new());
        assert!(index.is_empty());
        assert!(index.get("anything").is_empty());
    }

    #[test]
    fn test_groups_versions_under_bare_name() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("app", "golang.org/x/text@v0.3.7"),
            Edge::new("app", "github.com/pkg/errors@v0.9.1"),
            Edge::new("github.com/pkg/errors@v0.9.1", "golang.org/x/text@v0.3.8"),
        ]);
        let index = NameIndex::build(&graph);

        assert_eq!(
            ids(&graph, index.get("golang.org/x/text")),
            vec!["golang.org/x/text@v0.3.7", "golang.org/x/text@v0.3.8"]
        );
        assert_eq!(
            index.names().collect::<Vec<_>>(),
            vec!["app", "golang.org/x/text", "github.com/pkg/errors"]
        );
    }

    #[test]
    fn test_revisited_node_is_listed_per_chain() {
        // d@1 is shared by b and c
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("a@1", "c@1"),
            Edge::new("b@1", "d@1"),
            Edge::new("c@1", "d@1"),
        ]);
        let index = NameIndex::build(&graph);

        assert_eq!(ids(&graph, index.get("d")), vec!["d@1", "d@1"]);
    }

    #[test]
    fn test_unreachable_modules_not_indexed() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("x@1", "b@2"),
        ]);
        let index = NameIndex::build(&graph);

        assert_eq!(ids(&graph, index.get("b")), vec!["b@1"]);
        assert!(index.get("x").is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("b@1", "c@1"),
            Edge::new("a@1", "c@2"),
            Edge::new("a@1", "b@1"),
        ]);

        let first = NameIndex::build(&graph);
        let second = NameIndex::build(&graph);

        assert_eq!(first, second);
        for (name, nodes) in first.iter() {
            assert_eq!(nodes.len(), second.get(name).len());
        }
    }
}
