//! Generic syntax tree handed to the engine by an external front end.
//!
//! Nodes are addressable by kind tag, positionally, and by the field name they
//! occupy in their parent. The engine never parses raw text itself.

pub mod build;
pub mod kinds;
pub mod node;

pub use node::SyntaxNode;
