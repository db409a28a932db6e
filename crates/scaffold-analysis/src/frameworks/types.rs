//! TOML schema for strategy packs.

use serde::{Deserialize, Serialize};

/// One strategy pack (one TOML file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySpec {
    pub strategy: StrategyMeta,
    #[serde(default)]
    pub hooks: HookSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyMeta {
    /// Unique pack identifier, e.g. `tornadofx`.
    pub name: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub version: Option<String>,
}

/// What each hook looks for. An empty list or missing property name turns
/// the corresponding hook off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HookSpec {
    /// Supertype simple names that mark a class as a view component.
    pub component_supertypes: Vec<String>,
    /// Property name that binds the view's scope.
    pub scope_property: Option<String>,
    pub scope_source: ScopeSource,
    /// Property name whose initializer is the root builder call.
    pub root_property: Option<String>,
    /// Component names treated as interactive inputs, matched case-insensitively.
    pub input_controls: Vec<String>,
}

/// Where the scope name is read from in the scope property's initializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeSource {
    /// Right-hand side of `x as T`, falling back to `CallTarget`.
    #[default]
    CastTarget,
    /// Callee of `T(...)`, falling back to the whole initializer.
    CallTarget,
    /// The rendered initializer text.
    Initializer,
}
