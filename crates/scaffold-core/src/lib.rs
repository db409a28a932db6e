//! # scaffold-core
//!
//! Foundation crate for the scaffold reconstruction engine.
//! Defines errors, error codes, config, tracing bootstrap, and shared collection types.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ScaffoldConfig;
pub use errors::error_code::ScaffoldErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
