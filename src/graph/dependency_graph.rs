//! Module graph implementation using petgraph.
//!
//! Provides a directed graph of `name@version` nodes built from
//! `go mod graph` edges, with a designated root, ordered traversal,
//! and cycle detection.

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::parser::{split_identifier, Edge};

/// How many times [`DependencyGraph::walk`] enters one module by default.
pub const DEFAULT_VISIT_LIMIT: usize = 64;

/// Represents a node in the module graph.
///
/// Each node is one module at one version; two versions of the same module
/// are two distinct nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    /// Full identifier (e.g., "golang.org/x/text@v0.3.7")
    pub id: String,
    /// Bare module name (e.g., "golang.org/x/text")
    pub name: String,
    /// Version, empty for the main module
    pub version: String,
}

impl ModuleNode {
    /// Creates a new node from a module identifier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modconflict::graph::ModuleNode;
    ///
    /// let node = ModuleNode::new("github.com/pkg/errors@v0.9.1");
    /// assert_eq!(node.name, "github.com/pkg/errors");
    /// assert_eq!(node.version, "v0.9.1");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let (name, version) = split_identifier(&id);
        let (name, version) = (name.to_string(), version.to_string());
        Self { id, name, version }
    }
}

/// A directed graph of module requirements.
///
/// Edges point from the requiring module to the required one. Repeated
/// edges are kept as parallel edges. The root is the first parent seen,
/// which for `go mod graph` output is the main module.
///
/// # Example
///
/// ```rust
/// use modconflict::graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.add_edge("app", "lib@v1");
/// graph.add_edge("lib@v1", "util@v2");
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.root_node().unwrap().id, "app");
/// ```
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// The underlying directed graph
    graph: DiGraph<ModuleNode, ()>,
    /// Maps identifiers to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
    /// First parent seen in the edge stream
    root: Option<NodeIndex>,
    /// Maximum number of times a walk enters one module
    visit_limit: usize,
}

/// Counters from one [`DependencyGraph::walk`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Arrivals handed to the visitor
    pub visits: usize,
    /// Edges back onto the current chain that were not followed
    pub back_edges: usize,
    /// Arrivals dropped because the module hit the visit limit
    pub truncated: usize,
}

impl WalkStats {
    /// Returns true if the visit limit cut the walk short.
    pub fn is_truncated(&self) -> bool {
        self.truncated > 0
    }
}

struct WalkState {
    chain: Vec<NodeIndex>,
    entered: Vec<usize>,
    stats: WalkStats,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            root: None,
            visit_limit: DEFAULT_VISIT_LIMIT,
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
            root: None,
            visit_limit: DEFAULT_VISIT_LIMIT,
        }
    }

    /// Sets how many times a walk may enter one module. Values below one
    /// are raised to one.
    pub fn set_visit_limit(&mut self, limit: usize) {
        self.visit_limit = limit.max(1);
    }

    /// Builder form of [`Self::set_visit_limit`].
    pub fn with_visit_limit(mut self, limit: usize) -> Self {
        self.set_visit_limit(limit);
        self
    }

    /// Returns the per-module visit limit.
    pub fn visit_limit(&self) -> usize {
        self.visit_limit
    }

    /// Builds a graph from edges in stream order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modconflict::graph::DependencyGraph;
    /// use modconflict::parser::Edge;
    ///
    /// let graph = DependencyGraph::from_edges(vec![
    ///     Edge::new("a@1", "b@1"),
    ///     Edge::new("a@1", "c@1"),
    /// ]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let edges = edges.into_iter();
        let (lower, _) = edges.size_hint();
        let mut graph = Self::with_capacity(lower, lower);

        for edge in edges {
            graph.add_edge(&edge.parent, &edge.child);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built module graph"
        );
        graph
    }

    /// Adds a module to the graph, returning the existing index if the
    /// identifier was seen before.
    pub fn add_module(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(ModuleNode::new(id));
        self.node_indices.insert(id.to_string(), idx);
        idx
    }

    /// Records that `parent` requires `child`, creating either node on
    /// first mention.
    ///
    /// The first parent ever added becomes the root.
    pub fn add_edge(&mut self, parent: &str, child: &str) -> EdgeIndex {
        let parent_idx = self.add_module(parent);
        let child_idx = self.add_module(child);

        if self.root.is_none() {
            self.root = Some(parent_idx);
        }

        self.graph.add_edge(parent_idx, child_idx, ())
    }

    /// Returns the root index, if any edge was added.
    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Returns the root node, if any edge was added.
    pub fn root_node(&self) -> Option<&ModuleNode> {
        self.root.and_then(|idx| self.graph.node_weight(idx))
    }

    /// Gets the node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not belong to this graph.
    pub fn node(&self, idx: NodeIndex) -> &ModuleNode {
        &self.graph[idx]
    }

    /// Gets a node by identifier.
    pub fn get_node(&self, id: &str) -> Option<&ModuleNode> {
        self.node_indices
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Gets the index of a node by identifier.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    /// Returns the children of `idx` in edge discovery order.
    ///
    /// A child required twice by the same parent appears twice.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_neighbors(idx, Direction::Outgoing)
    }

    /// Returns the parents of `idx` in edge discovery order.
    pub fn parents(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_neighbors(idx, Direction::Incoming)
    }

    fn ordered_neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        // petgraph yields adjacent edges newest first
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|edge| match direction {
                Direction::Outgoing => (edge.id(), edge.target()),
                Direction::Incoming => (edge.id(), edge.source()),
            })
            .collect();
        edges.sort_by_key(|&(edge, _)| edge);
        edges.into_iter().map(|(_, node)| node).collect()
    }

    /// Gets the modules that `id` requires, in edge discovery order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modconflict::graph::DependencyGraph;
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_edge("app", "b@1");
    /// graph.add_edge("app", "a@1");
    ///
    /// let deps: Vec<&str> = graph.get_dependencies("app").iter().map(|n| n.id.as_str()).collect();
    /// assert_eq!(deps, vec!["b@1", "a@1"]);
    /// ```
    pub fn get_dependencies(&self, id: &str) -> Vec<&ModuleNode> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };

        self.children(idx).into_iter().map(|c| self.node(c)).collect()
    }

    /// Gets the modules that require `id`, in edge discovery order.
    pub fn get_dependents(&self, id: &str) -> Vec<&ModuleNode> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };

        self.parents(idx).into_iter().map(|p| self.node(p)).collect()
    }

    /// Walks the graph depth-first from the root.
    ///
    /// `visit` is called for every arrival at a node with the chain of
    /// indices from the root to that node (inclusive). A node reachable
    /// through several chains is visited once per chain, up to the visit
    /// limit; later arrivals are dropped without descending, so the walk
    /// costs at most `limit` times the edge count. Every reachable node is
    /// still visited at least once. An edge back to a node already on the
    /// current chain is not followed.
    ///
    /// Without a root this is a no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modconflict::graph::DependencyGraph;
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_edge("a@1", "b@1");
    /// graph.add_edge("b@1", "a@1");
    ///
    /// let mut visits = 0;
    /// let stats = graph.walk(|_, _| visits += 1);
    /// assert_eq!(visits, 2);
    /// assert_eq!(stats.back_edges, 1);
    /// ```
    pub fn walk<F>(&self, mut visit: F) -> WalkStats
    where
        F: FnMut(NodeIndex, &[NodeIndex]),
    {
        let Some(root) = self.root else {
            return WalkStats::default();
        };

        let mut state = WalkState {
            chain: Vec::new(),
            entered: vec![0; self.graph.node_count()],
            stats: WalkStats::default(),
        };
        self.walk_from(root, &mut state, &mut visit);

        let stats = state.stats;
        tracing::debug!(
            visits = stats.visits,
            back_edges = stats.back_edges,
            truncated = stats.truncated,
            "walked module graph"
        );
        stats
    }

    fn walk_from<F>(&self, idx: NodeIndex, state: &mut WalkState, visit: &mut F)
    where
        F: FnMut(NodeIndex, &[NodeIndex]),
    {
        state.entered[idx.index()] += 1;
        state.stats.visits += 1;
        state.chain.push(idx);
        visit(idx, state.chain.as_slice());

        for child in self.children(idx) {
            if state.chain.contains(&child) {
                tracing::trace!(
                    from = %self.node(idx).id,
                    to = %self.node(child).id,
                    "back edge"
                );
                state.stats.back_edges += 1;
                continue;
            }
            if state.entered[child.index()] >= self.visit_limit {
                state.stats.truncated += 1;
                continue;
            }
            self.walk_from(child, state, visit);
        }

        state.chain.pop();
    }

    /// Checks if the graph contains cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modconflict::graph::DependencyGraph;
    ///
    /// let mut graph = DependencyGraph::new();
    /// graph.add_edge("a@1", "b@1");
    /// graph.add_edge("b@1", "a@1"); // Creates a cycle
    ///
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Detects and returns all cycles in the graph.
    ///
    /// One cycle is reported per strongly connected component of more than
    /// one module, or per module requiring itself. Each cycle lists modules
    /// in edge order, starting from the component's first-discovered module,
    /// and follows real edges only.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        self.get_cycle_details()
            .into_iter()
            .map(|cycle| cycle.nodes)
            .collect()
    }

    /// Returns detailed cycle information for reporting.
    pub fn get_cycle_details(&self) -> Vec<CycleInfo> {
        let mut cycles: Vec<CycleInfo> = self
            .cycle_components()
            .into_iter()
            .map(|members| CycleInfo {
                nodes: self.ids(&self.cycle_through(&members)),
                members: self.ids(&members),
            })
            .collect();

        cycles.sort_by(|a, b| a.members.cmp(&b.members));
        cycles
    }

    fn ids(&self, indices: &[NodeIndex]) -> Vec<String> {
        indices.iter().map(|&idx| self.node(idx).id.clone()).collect()
    }

    /// Strongly connected components that contain a cycle, members sorted
    /// in discovery order.
    fn cycle_components(&self) -> Vec<Vec<NodeIndex>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| match scc.as_slice() {
                [idx] => self.graph.contains_edge(*idx, *idx),
                _ => true,
            })
            .map(|mut scc| {
                scc.sort();
                scc
            })
            .collect()
    }

    /// Shortest cycle through the first member, found breadth-first over
    /// edges inside the component.
    fn cycle_through(&self, members: &[NodeIndex]) -> Vec<NodeIndex> {
        let Some(&start) = members.first() else {
            return Vec::new();
        };
        let in_component: HashSet<NodeIndex> = members.iter().copied().collect();
        let mut previous: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(idx) = queue.pop_front() {
            for child in self.children(idx) {
                if child == start {
                    let mut cycle = vec![idx];
                    let mut current = idx;
                    while let Some(&parent) = previous.get(&current) {
                        cycle.push(parent);
                        current = parent;
                    }
                    cycle.reverse();
                    return cycle;
                }
                if in_component.contains(&child) && !previous.contains_key(&child) {
                    previous.insert(child, idx);
                    queue.push_back(child);
                }
            }
        }

        vec![start]
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a node exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }
}

/// Information about a detected dependency cycle.
///
/// `nodes` is one concrete cycle, each module requiring the next and the
/// last requiring the first. `members` is the whole strongly connected
/// component, which can be larger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleInfo {
    /// The module identifiers along the cycle, in edge order
    pub nodes: Vec<String>,
    /// Every module of the component, in discovery order
    pub members: Vec<String>,
}

impl CycleInfo {
    /// Returns a formatted string representation of the cycle.
    ///
    /// For example: "a@1 -> b@1 -> a@1"
    pub fn cycle_path(&self) -> String {
        let Some(first) = self.nodes.first() else {
            return String::new();
        };
        format!("{} -> {}", self.nodes.join(" -> "), first)
    }

    /// Returns the component as a set, e.g. "{a@1, b@1, c@1}".
    pub fn component(&self) -> String {
        format!("{{{}}}", self.members.join(", "))
    }

    /// Returns true if the component has modules off the reported cycle.
    pub fn has_more_members(&self) -> bool {
        self.members.len() > self.nodes.len()
    }

    /// Returns the number of modules in the cycle.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the cycle is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(graph: &DependencyGraph, indices: Vec<NodeIndex>) -> Vec<&str> {
        indices
            .into_iter()
            .map(|idx| graph.node(idx).id.as_str())
            .collect()
    }

    #[test]
    fn test_create_empty_graph() {
        let graph = DependencyGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        assert!(graph.root().is_none());
    }

    #[test]
    fn test_from_edges_empty_has_no_root() {
        let graph = DependencyGraph::from_edges(Vec::new());
        assert!(graph.root_node().is_none());

        let mut visits = 0;
        assert_eq!(graph.walk(|_, _| visits += 1), WalkStats::default());
        assert_eq!(visits, 0);
    }

    #[test]
    fn test_module_node_without_version() {
        let node = ModuleNode::new("example.com/app");
        assert_eq!(node.name, "example.com/app");
        assert_eq!(node.version, "");
    }

    #[test]
    fn test_add_module_reuses_identifier() {
        let mut graph = DependencyGraph::new();
        let idx = graph.add_module("lib@v1");
        let idx2 = graph.add_module("lib@v1");
        assert_eq!(idx, idx2);
        assert_eq!(graph.node_count(), 1);

        // Another version is another node
        graph.add_module("lib@v2");
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_root_is_first_parent() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("app", "b@1"),
            Edge::new("b@1", "c@1"),
            Edge::new("z@1", "app"),
        ]);
        assert_eq!(graph.root_node().unwrap().id, "app");
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_children_in_discovery_order_with_duplicates() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "c@1"),
            Edge::new("a@1", "b@1"),
            Edge::new("a@1", "d@1"),
            Edge::new("a@1", "b@1"),
        ]);
        let root = graph.root().unwrap();

        assert_eq!(
            ids(&graph, graph.children(root)),
            vec!["c@1", "b@1", "d@1", "b@1"]
        );
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_parents_in_discovery_order() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("a@1", "c@1"),
            Edge::new("c@1", "b@1"),
        ]);
        let b = graph.index_of("b@1").unwrap();

        assert_eq!(ids(&graph, graph.parents(b)), vec!["a@1", "c@1"]);

        let dependents: Vec<&str> = graph
            .get_dependents("b@1")
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(dependents, vec!["a@1", "c@1"]);
        assert!(graph.get_dependents("nonexistent").is_empty());
    }

    #[test]
    fn test_get_node() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("app", "golang.org/x/text@v0.3.7");

        let node = graph.get_node("golang.org/x/text@v0.3.7").unwrap();
        assert_eq!(node.name, "golang.org/x/text");
        assert_eq!(node.version, "v0.3.7");

        assert!(graph.get_node("golang.org/x/text").is_none());
        assert!(graph.contains("app"));
    }

    #[test]
    fn test_walk_visits_diamond_twice() {
        // a -> b -> d, a -> c -> d
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("a@1", "c@1"),
            Edge::new("b@1", "d@1"),
            Edge::new("c@1", "d@1"),
        ]);

        let mut chains: Vec<Vec<String>> = Vec::new();
        let stats = graph.walk(|_, chain| {
            chains.push(chain.iter().map(|&i| graph.node(i).id.clone()).collect());
        });

        assert_eq!(stats.back_edges, 0);
        assert_eq!(stats.visits, 5);
        assert!(!stats.is_truncated());
        assert_eq!(
            chains,
            vec![
                vec!["a@1"],
                vec!["a@1", "b@1"],
                vec!["a@1", "b@1", "d@1"],
                vec!["a@1", "c@1"],
                vec!["a@1", "c@1", "d@1"],
            ]
        );
    }

    #[test]
    fn test_walk_terminates_on_cycle() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("b@1", "c@1"),
            Edge::new("c@1", "a@1"),
            Edge::new("c@1", "c@1"),
        ]);

        let mut visits = 0;
        let stats = graph.walk(|_, _| visits += 1);
        assert_eq!(visits, 3);
        assert_eq!(stats.back_edges, 2);
    }

    /// `levels` rungs of two modules, each requiring both modules of the
    /// next rung, so the number of root-to-bottom chains doubles per rung.
    fn ladder(levels: usize) -> DependencyGraph {
        let mut edges = vec![
            Edge::new("app", "l0a@v1"),
            Edge::new("app", "l0b@v1"),
        ];
        for level in 0..levels - 1 {
            for from in ["a", "b"] {
                for to in ["a", "b"] {
                    edges.push(Edge::new(
                        format!("l{level}{from}@v1"),
                        format!("l{}{to}@v1", level + 1),
                    ));
                }
            }
        }
        DependencyGraph::from_edges(edges)
    }

    #[test]
    fn test_walk_deep_ladder_is_bounded() {
        let graph = ladder(24);
        assert_eq!(graph.node_count(), 49);

        let mut reached = HashSet::new();
        let stats = graph.walk(|idx, _| {
            reached.insert(idx);
        });

        assert_eq!(reached.len(), graph.node_count());
        assert!(stats.visits <= DEFAULT_VISIT_LIMIT * graph.node_count());
        assert!(stats.is_truncated());
    }

    #[test]
    fn test_walk_visit_limit_one() {
        // a -> b -> d, a -> c -> d
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("a@1", "c@1"),
            Edge::new("b@1", "d@1"),
            Edge::new("c@1", "d@1"),
        ])
        .with_visit_limit(0);
        assert_eq!(graph.visit_limit(), 1);

        let mut visited = Vec::new();
        let stats = graph.walk(|idx, _| visited.push(graph.node(idx).id.clone()));

        assert_eq!(visited, vec!["a@1", "b@1", "d@1", "c@1"]);
        assert_eq!(stats.truncated, 1);
    }

    #[test]
    fn test_has_cycles() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("a@1", "b@1");
        graph.add_edge("b@1", "c@1");
        assert!(!graph.has_cycles());

        graph.add_edge("c@1", "a@1");
        assert!(graph.has_cycles());
    }

    #[test]
    fn test_detect_cycles() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("a@1", "b@1");
        graph.add_edge("b@1", "c@1");
        graph.add_edge("c@1", "b@1");
        graph.add_edge("a@1", "d@1");

        let cycles = graph.detect_cycles();
        assert_eq!(cycles, vec![vec!["b@1".to_string(), "c@1".to_string()]]);
    }

    #[test]
    fn test_detect_cycles_self_loop() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("self-ref@1", "self-ref@1");

        let cycles = graph.detect_cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0], vec!["self-ref@1"]);
    }

    #[test]
    fn test_get_cycle_details() {
        let mut graph = DependencyGraph::new();
        graph.add_edge("a@1", "b@1");
        graph.add_edge("b@1", "a@1");

        let details = graph.get_cycle_details();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].cycle_path(), "a@1 -> b@1 -> a@1");
        assert!(!details[0].has_more_members());
    }

    fn assert_follows_edges(graph: &DependencyGraph, cycle: &CycleInfo) {
        let mut closed = cycle.nodes.clone();
        closed.push(cycle.nodes[0].clone());
        for pair in closed.windows(2) {
            let required: Vec<&str> = graph
                .get_dependencies(&pair[0])
                .iter()
                .map(|n| n.id.as_str())
                .collect();
            assert!(required.contains(&pair[1].as_str()), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_cycle_follows_edges_not_discovery_order() {
        // a -> c -> b -> a, with b discovered before c
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("r@1", "a@1"),
            Edge::new("r@1", "b@1"),
            Edge::new("r@1", "c@1"),
            Edge::new("a@1", "c@1"),
            Edge::new("c@1", "b@1"),
            Edge::new("b@1", "a@1"),
        ]);

        let details = graph.get_cycle_details();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].cycle_path(), "a@1 -> c@1 -> b@1 -> a@1");
        assert_follows_edges(&graph, &details[0]);
    }

    #[test]
    fn test_cycle_in_larger_component() {
        let graph = DependencyGraph::from_edges(vec![
            Edge::new("a@1", "b@1"),
            Edge::new("a@1", "c@1"),
            Edge::new("c@1", "b@1"),
            Edge::new("b@1", "a@1"),
        ]);

        let details = graph.get_cycle_details();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].cycle_path(), "a@1 -> b@1 -> a@1");
        assert_eq!(details[0].component(), "{a@1, b@1, c@1}");
        assert!(details[0].has_more_members());
        assert_follows_edges(&graph, &details[0]);
    }

    #[test]
    fn test_cycle_info_empty() {
        let cycle = CycleInfo {
            nodes: vec![],
            members: vec![],
        };
        assert!(cycle.is_empty());
        assert_eq!(cycle.len(), 0);
        assert_eq!(cycle.cycle_path(), "");
    }
}
