//! Framework strategies: pluggable recognition of component supertypes,
//! scope bindings, builder-root properties and input controls.
//!
//! - `types.rs`: TOML schema for strategy packs
//! - `loader.rs`: TOML → `PackStrategy`
//! - `strategy.rs`: `FrameworkStrategy` trait, `ViewDescriptor`, `PackStrategy`
//! - `registry.rs`: built-in + custom packs selected through `[frameworks]` config

pub mod loader;
pub mod registry;
pub mod strategy;
pub mod types;

pub use registry::{StrategyDiagnostics, StrategyRegistry};
pub use strategy::{FrameworkStrategy, HookContext, PackStrategy, ViewDescriptor};
