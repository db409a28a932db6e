//! ViewHierarchyBuilder: nested builder calls → `Digraph`.
//!
//! Only call + trailing-lambda pairs become nodes. A new node at depth `d`
//! is attached to the most recently inserted node at depth `d - 1` of the
//! same graph. That rule is an approximation: it is exact for the usual
//! depth-first builder nesting, but a graph already holding nodes from an
//! earlier build can capture children that belong elsewhere.

use crate::engine::gast::types::{Expr, Stmt};
use crate::engine::reconstruct::Reconstructor;

use super::digraph::{Digraph, NodeOrigin, UiNode};

/// Counts from one hierarchy build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes at depth > 0 inserted without a parent.
    pub orphans: usize,
    pub depth_limit_hits: usize,
}

#[derive(Debug, Clone)]
pub struct ViewHierarchyBuilder {
    max_depth: usize,
}

impl ViewHierarchyBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Walk `root` (the builder-root property's initializer) at depth 0 and
    /// insert every call + lambda pair found into `graph`. `on_node` sees each
    /// node right after it is inserted.
    pub fn build(
        &self,
        root: &Expr,
        class_name: &str,
        graph: &mut Digraph,
        on_node: &mut dyn FnMut(&UiNode),
    ) -> BuildOutcome {
        let mut outcome = BuildOutcome::default();
        let mut origin = NodeOrigin::new();
        self.visit(root, 0, &mut origin, graph, on_node, &mut outcome);
        tracing::debug!(
            class = class_name,
            nodes = outcome.nodes,
            edges = outcome.edges,
            orphans = outcome.orphans,
            "view hierarchy built"
        );
        outcome
    }

    fn visit(
        &self,
        expr: &Expr,
        depth: usize,
        origin: &mut NodeOrigin,
        graph: &mut Digraph,
        on_node: &mut dyn FnMut(&UiNode),
        outcome: &mut BuildOutcome,
    ) {
        let Expr::Call {
            callee,
            lambda: Some(lambda),
            ..
        } = expr
        else {
            return;
        };
        if depth > self.max_depth {
            tracing::warn!(limit = self.max_depth, "view hierarchy depth ceiling reached");
            outcome.depth_limit_hits += 1;
            return;
        }

        let node = UiNode::new(component_label(callee), depth, origin.clone());
        let idx = graph.add_node(node);
        outcome.nodes += 1;

        if depth > 0 {
            match graph.find_last_at_depth(depth - 1) {
                Some(parent) => {
                    if graph.add_edge(parent, idx) {
                        outcome.edges += 1;
                    }
                }
                None => outcome.orphans += 1,
            }
        }

        if let Some(inserted) = graph.node(idx) {
            on_node(inserted);
        }

        for (i, stmt) in lambda.body.iter().enumerate() {
            origin.push(i);
            self.visit_stmt(stmt, depth + 1, origin, graph, on_node, outcome);
            origin.pop();
        }
    }

    fn visit_stmt(
        &self,
        stmt: &Stmt,
        depth: usize,
        origin: &mut NodeOrigin,
        graph: &mut Digraph,
        on_node: &mut dyn FnMut(&UiNode),
        outcome: &mut BuildOutcome,
    ) {
        // Declarations and raw statements are not components.
        if let Stmt::Expression(expr) = stmt {
            self.visit(expr, depth, origin, graph, on_node, outcome);
        }
    }
}

/// The component name of a builder call: the last identifier of a plain
/// callee chain (`vbox`, `this.form` → `form`), else the rendered callee.
fn component_label(callee: &Expr) -> String {
    match callee {
        Expr::Reference { segments } => match segments.last() {
            Some(last) => last.clone(),
            None => String::new(),
        },
        other => Reconstructor::new().expr_text(other),
    }
}
