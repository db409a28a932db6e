//! Per-class graph of UI component nodes.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use smallvec::SmallVec;

/// Statement-index path from the root builder call to the originating call.
///
/// Empty for the root itself; `[2, 0]` is the first statement of the lambda
/// found at statement 2 of the root lambda.
pub type NodeOrigin = SmallVec<[usize; 8]>;

/// One builder call in a view hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct UiNode {
    /// Component name, e.g. `vbox` or `textfield`.
    pub label: String,
    /// Nesting depth; the root builder call is 0.
    pub depth: usize,
    pub origin: NodeOrigin,
}

impl UiNode {
    pub fn new(label: impl Into<String>, depth: usize, origin: NodeOrigin) -> Self {
        Self {
            label: label.into(),
            depth,
            origin,
        }
    }
}

/// UI nodes plus ordered parent → child edges.
///
/// Every edge joins a node at depth `d` to one at depth `d + 1`; `add_edge`
/// refuses anything else. Node indices follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    graph: DiGraph<UiNode, ()>,
}

impl Digraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: UiNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    /// Add `parent → child`. Returns false, leaving the graph unchanged, when
    /// either index is missing or the depths are not consecutive.
    pub fn add_edge(&mut self, parent: NodeIndex, child: NodeIndex) -> bool {
        let (Some(p), Some(c)) = (self.graph.node_weight(parent), self.graph.node_weight(child)) else {
            return false;
        };
        if c.depth != p.depth + 1 {
            tracing::debug!(
                parent = %p.label,
                child = %c.label,
                "rejecting edge between non-consecutive depths"
            );
            return false;
        }
        self.graph.add_edge(parent, child, ());
        true
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&UiNode> {
        self.graph.node_weight(idx)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &UiNode)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx).map(|n| (idx, n)))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> Vec<(NodeIndex, NodeIndex)> {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target()))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Most recently inserted node at `depth`.
    pub fn find_last_at_depth(&self, depth: usize) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .rev()
            .find(|&idx| self.graph[idx].depth == depth)
    }

    /// Children of `idx` in the order their edges were added.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks adjacency lists newest-first.
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        out.sort_by_key(|(edge, _)| *edge);
        out.into_iter().map(|(_, target)| target).collect()
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
    }

    /// Nodes with no inbound edge: the depth-0 root plus any orphans.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes().map(|(_, n)| n.label.as_str()).collect()
    }

    /// Indented outline, two spaces per depth level, one node per line.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        for root in self.roots() {
            self.render_subtree(root, &mut out);
        }
        out
    }

    fn render_subtree(&self, idx: NodeIndex, out: &mut String) {
        let node = &self.graph[idx];
        for _ in 0..node.depth {
            out.push_str("  ");
        }
        out.push_str(&node.label);
        out.push('\n');
        for child in self.children(idx) {
            self.render_subtree(child, out);
        }
    }

    fn snapshot(&self) -> DigraphSnapshot<'_> {
        DigraphSnapshot {
            nodes: self.nodes().map(|(_, n)| n).collect(),
            edges: self
                .edges()
                .into_iter()
                .map(|(s, t)| (s.index(), t.index()))
                .collect(),
        }
    }
}

/// Structural equality: same nodes and same edges, both in insertion order.
impl PartialEq for Digraph {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot() == other.snapshot()
    }
}

impl Eq for Digraph {}

impl Serialize for Digraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

#[derive(PartialEq, serde::Serialize)]
struct DigraphSnapshot<'a> {
    nodes: Vec<&'a UiNode>,
    edges: Vec<(usize, usize)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str, depth: usize) -> UiNode {
        UiNode::new(label, depth, NodeOrigin::new())
    }

    #[test]
    fn edge_requires_consecutive_depths() {
        let mut g = Digraph::new();
        let root = g.add_node(node("vbox", 0));
        let deep = g.add_node(node("label", 2));
        let child = g.add_node(node("hbox", 1));
        assert!(!g.add_edge(root, deep));
        assert!(g.add_edge(root, child));
        assert!(!g.add_edge(child, root));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.parent(child), Some(root));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut g = Digraph::new();
        let root = g.add_node(node("form", 0));
        let a = g.add_node(node("fieldset", 1));
        let b = g.add_node(node("button", 1));
        let c = g.add_node(node("label", 1));
        g.add_edge(root, a);
        g.add_edge(root, b);
        g.add_edge(root, c);
        assert_eq!(g.children(root), vec![a, b, c]);
    }

    #[test]
    fn last_at_depth_and_roots() {
        let mut g = Digraph::new();
        let root = g.add_node(node("vbox", 0));
        let first = g.add_node(node("hbox", 1));
        let second = g.add_node(node("hbox", 1));
        let orphan = g.add_node(node("label", 3));
        g.add_edge(root, first);
        g.add_edge(root, second);
        assert_eq!(g.find_last_at_depth(1), Some(second));
        assert_eq!(g.find_last_at_depth(2), None);
        assert_eq!(g.roots(), vec![root, orphan]);
    }

    #[test]
    fn render_tree_indents_by_depth() {
        let mut g = Digraph::new();
        let root = g.add_node(node("vbox", 0));
        let a = g.add_node(node("textfield", 1));
        let b = g.add_node(node("button", 1));
        g.add_edge(root, a);
        g.add_edge(root, b);
        assert_eq!(g.render_tree(), "vbox\n  textfield\n  button\n");
    }

    #[test]
    fn serializes_as_nodes_and_edge_pairs() {
        let mut g = Digraph::new();
        let root = g.add_node(node("vbox", 0));
        let child = g.add_node(UiNode::new("label", 1, NodeOrigin::from_slice(&[0])));
        g.add_edge(root, child);
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["nodes"][1]["label"], "label");
        assert_eq!(json["nodes"][1]["origin"][0], 0);
        assert_eq!(json["edges"][0][0], 0);
        assert_eq!(json["edges"][0][1], 1);
    }

    #[test]
    fn equality_is_structural() {
        let build = || {
            let mut g = Digraph::new();
            let r = g.add_node(node("vbox", 0));
            let c = g.add_node(node("label", 1));
            g.add_edge(r, c);
            g
        };
        assert_eq!(build(), build());
        let mut other = build();
        other.add_node(node("button", 0));
        assert_ne!(build(), other);
    }
}
