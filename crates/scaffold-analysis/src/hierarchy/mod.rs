//! View hierarchy: UI builder nesting rebuilt as a directed graph.
//!
//! - `digraph.rs`: `Digraph` and `UiNode`, backed by petgraph
//! - `builder.rs`: `ViewHierarchyBuilder`, the last-seen-parent walk

pub mod builder;
pub mod digraph;

pub use builder::{BuildOutcome, ViewHierarchyBuilder};
pub use digraph::{Digraph, NodeOrigin, UiNode};
