//! Lowering and reconstruction engine.
//!
//! - `gast`: closed, typed node variants and the lowering pass from the generic tree
//! - `reconstruct`: renders typed nodes back into statement text

pub mod gast;
pub mod reconstruct;
