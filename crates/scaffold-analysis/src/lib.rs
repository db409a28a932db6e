//! # scaffold-analysis
//!
//! Reconstruction engine for test scaffolding.
//! Lowers a generic syntax tree into typed GAST nodes, reconstructs class
//! models with readable method bodies, and rebuilds UI builder hierarchies
//! as directed graphs. Framework knowledge is supplied by pluggable strategies.

pub mod analyzer;
pub mod breakdown;
pub mod context;
pub mod engine;
pub mod frameworks;
pub mod hierarchy;
pub mod parsers;
pub mod syntax;

pub use analyzer::{Analyzer, BatchResult};
pub use context::{ParseContext, RunDiagnostics, TestClassInfo};
pub use syntax::SyntaxNode;
