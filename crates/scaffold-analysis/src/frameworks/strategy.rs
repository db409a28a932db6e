//! The strategy capability interface and its pack-driven implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::breakdown::ClassModel;
use crate::engine::gast::types::{Declaration, Expr};
use crate::engine::reconstruct::Reconstructor;
use crate::hierarchy::UiNode;

use super::types::{ScopeSource, StrategySpec};

/// Per-class framework facts gathered by strategy hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    /// Recognized component kind, e.g. `View` or `Fragment`.
    pub kind: Option<String>,
    /// The class carrying that kind.
    pub view_class: Option<String>,
    pub scope: Option<String>,
    /// `<package>.<Class>`, recorded when the builder root is found.
    pub import_path: Option<String>,
    /// Input control labels in detection order.
    pub controls: Vec<String>,
}

impl ViewDescriptor {
    pub fn is_empty(&self) -> bool {
        self == &ViewDescriptor::default()
    }
}

/// What a hook may read about the class under breakdown.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub class_name: &'a str,
    pub package: Option<&'a str>,
    /// Classes already broken down in this run.
    pub classes: &'a BTreeMap<String, ClassModel>,
}

impl HookContext<'_> {
    /// `<package>.<class>`, or the bare class name outside a package.
    pub fn import_path(&self) -> String {
        match self.package {
            Some(pkg) if !pkg.is_empty() => format!("{pkg}.{}", self.class_name),
            _ => self.class_name.to_string(),
        }
    }
}

/// Framework-specific recognition hooks.
///
/// Hooks only write to the class's `ViewDescriptor`. A `true` from
/// `recognize_root` asks the core to build the view hierarchy from that
/// property's initializer.
pub trait FrameworkStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn recognize_supertype(&self, supertype: &str, cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool;

    fn recognize_binding(&self, property: &Declaration, cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool;

    fn recognize_root(&self, property: &Declaration, cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool;

    /// Called for every UI node of a hierarchy this strategy rooted.
    fn recognize_control(&self, _node: &UiNode, _cx: &HookContext<'_>, _view: &mut ViewDescriptor) -> bool {
        false
    }
}

/// A strategy compiled from a TOML pack.
#[derive(Debug, Clone)]
pub struct PackStrategy {
    spec: StrategySpec,
}

impl PackStrategy {
    pub fn new(spec: StrategySpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &StrategySpec {
        &self.spec
    }

    pub fn version(&self) -> Option<&str> {
        self.spec.strategy.version.as_deref()
    }

    fn scope_name(&self, init: &Expr) -> String {
        let source = self.spec.hooks.scope_source;
        if source == ScopeSource::CastTarget {
            if let Expr::Binary { op, right, .. } = init {
                if op.is_cast() {
                    return Reconstructor::new().expr_text(right);
                }
            }
        }
        if source != ScopeSource::Initializer {
            if let Expr::Call { callee, .. } = init {
                return Reconstructor::new().expr_text(callee);
            }
        }
        Reconstructor::new().expr_text(init)
    }
}

impl FrameworkStrategy for PackStrategy {
    fn name(&self) -> &str {
        &self.spec.strategy.name
    }

    fn recognize_supertype(&self, supertype: &str, cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool {
        let simple = simple_type_name(supertype);
        let Some(kind) = self
            .spec
            .hooks
            .component_supertypes
            .iter()
            .find(|k| k.as_str() == simple)
        else {
            return false;
        };
        view.kind = Some(kind.clone());
        view.view_class = Some(cx.class_name.to_string());
        true
    }

    fn recognize_binding(&self, property: &Declaration, _cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool {
        let Some(scope_property) = self.spec.hooks.scope_property.as_deref() else {
            return false;
        };
        // Scopes only attach to recognized views.
        if view.kind.is_none() || property.name() != Some(scope_property) {
            return false;
        }
        let Some(init) = &property.initializer else {
            return false;
        };
        view.scope = Some(self.scope_name(init));
        true
    }

    fn recognize_root(&self, property: &Declaration, cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool {
        let Some(root_property) = self.spec.hooks.root_property.as_deref() else {
            return false;
        };
        if property.name() != Some(root_property) || property.initializer.is_none() {
            return false;
        }
        view.import_path = Some(cx.import_path());
        true
    }

    fn recognize_control(&self, node: &UiNode, _cx: &HookContext<'_>, view: &mut ViewDescriptor) -> bool {
        let is_input = self
            .spec
            .hooks
            .input_controls
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&node.label));
        if is_input {
            view.controls.push(node.label.clone());
        }
        is_input
    }
}

/// `tornadofx.View<Foo>` → `View`.
fn simple_type_name(type_name: &str) -> &str {
    let base = match type_name.find('<') {
        Some(i) => &type_name[..i],
        None => type_name,
    };
    let base = base.trim().trim_end_matches('?');
    match base.rfind('.') {
        Some(i) => &base[i + 1..],
        None => base,
    }
}
