//! Front ends that turn source text into the generic syntax tree.
//!
//! The engine never depends on these; any producer of `SyntaxNode` trees
//! (including JSON from another tool) works the same way.

pub mod kotlin;

pub use kotlin::KotlinFrontend;
