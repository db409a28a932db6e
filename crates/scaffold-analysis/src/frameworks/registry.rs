//! Strategy registry: built-in packs plus user packs from a directory.
//!
//! Built-in packs are embedded at compile time via `include_str!`.

use std::collections::BTreeMap;
use std::path::Path;

use scaffold_core::config::FrameworkConfig;
use scaffold_core::errors::StrategyError;

use super::loader;
use super::strategy::{FrameworkStrategy, PackStrategy};

/// Load-time counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyDiagnostics {
    pub builtin_packs_loaded: usize,
    pub builtin_packs_skipped: usize,
    pub custom_packs_loaded: usize,
    pub custom_packs_skipped: usize,
    pub pack_versions: BTreeMap<String, String>,
}

impl StrategyDiagnostics {
    pub fn summary(&self) -> String {
        format!(
            "{} strategies ({} builtin, {} custom), {} skipped",
            self.builtin_packs_loaded + self.custom_packs_loaded,
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.builtin_packs_skipped + self.custom_packs_skipped,
        )
    }
}

/// Ordered set of active strategies. Hooks run in registration order.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn FrameworkStrategy>>,
    diag: StrategyDiagnostics,
}

impl StrategyRegistry {
    /// A registry with no strategies; breakdown still produces class models.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        Self::with_builtins_filtered(&FrameworkConfig::default())
    }

    pub fn with_builtins_filtered(config: &FrameworkConfig) -> Self {
        let mut registry = Self::empty();
        for (name, toml_str) in builtin_packs() {
            if config.is_pack_disabled(name) {
                registry.diag.builtin_packs_skipped += 1;
                continue;
            }
            match loader::load_from_str(toml_str) {
                Ok(pack) => {
                    registry.diag.builtin_packs_loaded += 1;
                    registry.push_pack(pack);
                }
                Err(e) => {
                    tracing::warn!(pack = name, error = %e, "failed to load built-in strategy pack");
                    registry.diag.builtin_packs_skipped += 1;
                }
            }
        }
        registry
    }

    /// Built-ins plus every `*.toml` pack in `config.custom_dir`, all filtered
    /// through `config`. Custom packs load in file-name order.
    pub fn from_config(config: &FrameworkConfig) -> Self {
        let mut registry = Self::with_builtins_filtered(config);
        if let Some(dir) = config.custom_dir.as_deref() {
            registry.load_custom_dir(Path::new(dir), config);
        }
        tracing::debug!(summary = %registry.diag.summary(), "strategy registry ready");
        registry
    }

    fn load_custom_dir(&mut self, dir: &Path, config: &FrameworkConfig) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot read custom strategy directory");
                return;
            }
        };
        let mut paths: Vec<_> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        for path in paths {
            match loader::load_from_file(&path) {
                Ok(pack) if config.is_pack_disabled(pack.name()) => {
                    self.diag.custom_packs_skipped += 1;
                }
                Ok(pack) => {
                    self.diag.custom_packs_loaded += 1;
                    self.push_pack(pack);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load custom strategy pack");
                    self.diag.custom_packs_skipped += 1;
                }
            }
        }
    }

    fn push_pack(&mut self, pack: PackStrategy) {
        if let Some(version) = pack.version() {
            self.diag
                .pack_versions
                .insert(pack.name().to_string(), version.to_string());
        }
        self.strategies.push(Box::new(pack));
    }

    /// Add a hand-written strategy after the loaded packs.
    pub fn register(&mut self, strategy: Box<dyn FrameworkStrategy>) {
        self.strategies.push(strategy);
    }

    /// Load a single pack from a TOML string.
    pub fn load_single(toml_str: &str) -> Result<PackStrategy, StrategyError> {
        loader::load_from_str(toml_str)
    }

    /// A built-in pack by name, if it exists and parses.
    pub fn builtin_pack(name: &str) -> Option<PackStrategy> {
        builtin_packs()
            .into_iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, toml_str)| loader::load_from_str(toml_str).ok())
    }

    pub fn strategies(&self) -> &[Box<dyn FrameworkStrategy>] {
        &self.strategies
    }

    pub fn names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn diagnostics(&self) -> &StrategyDiagnostics {
        &self.diag
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .field("diag", &self.diag)
            .finish()
    }
}

/// Built-in strategy packs embedded at compile time.
fn builtin_packs() -> Vec<(&'static str, &'static str)> {
    vec![("tornadofx", include_str!("packs/tornadofx.toml"))]
}
