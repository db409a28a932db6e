//! Reconstruction of typed GAST nodes into readable statement text.
//!
//! Rendering is best-effort: an unrecognized shape emits its raw text and the
//! walk moves on. `Reconstructor` carries the counters for those fallbacks.
//!
//! - `primitives.rs`: literal → (type tag, literal text)
//! - `expression.rs`: expressions into a running buffer
//! - `declaration.rs`: `val`/`var` declarations
//! - `statements.rs`: ordered statement blocks

mod declaration;
mod expression;
pub mod primitives;
mod statements;

use serde::{Deserialize, Serialize};

use crate::engine::gast::types::DEPTH_LIMIT_KIND;

pub use primitives::{PrimitiveResolver, PrimitiveType, UNKNOWN_TYPE};

/// Counters gathered while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Top-level method-body statements; lambda and block contents are not counted.
    pub statements: usize,
    pub raw_fallbacks: usize,
    pub depth_limit_hits: usize,
}

impl RenderStats {
    pub fn merge(&mut self, other: &RenderStats) {
        self.statements += other.statements;
        self.raw_fallbacks += other.raw_fallbacks;
        self.depth_limit_hits += other.depth_limit_hits;
    }
}

/// Renders expressions, declarations, and statement blocks.
#[derive(Debug, Default)]
pub struct Reconstructor {
    stats: RenderStats,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Hand back the counters gathered so far and reset them.
    pub fn take_stats(&mut self) -> RenderStats {
        std::mem::take(&mut self.stats)
    }

    fn note_fallback(&mut self, kind: &str) {
        self.stats.raw_fallbacks += 1;
        if kind == DEPTH_LIMIT_KIND {
            self.stats.depth_limit_hits += 1;
        }
        tracing::trace!(kind, "raw fallback");
    }
}

/// Raw text for an unrecognized node; never empty.
fn fallback_text<'a>(kind: &'a str, raw: &'a str) -> &'a str {
    let raw = raw.trim();
    if raw.is_empty() {
        kind
    } else {
        raw
    }
}
