//! Hash collections used across the workspace.
//!
//! `FxHashMap` is used for internal lookup indices only. Anything that reaches
//! run output is keyed through ordered maps so results stay deterministic.

pub use rustc_hash::{FxHashMap, FxHashSet};
