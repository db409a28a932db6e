//! ClassBreakdown: one declared type → `ClassModel`, `Digraph` and
//! `ViewDescriptor`, written into the run's `ParseContext`.

use scaffold_core::FxHashSet;

use crate::context::ParseContext;
use crate::engine::gast::types::{ClassDecl, Declaration, Expr, FunctionDecl, ParamDecl, SourceFile};
use crate::engine::reconstruct::{PrimitiveResolver, PrimitiveType, Reconstructor, UNKNOWN_TYPE};
use crate::frameworks::{FrameworkStrategy, HookContext, StrategyRegistry, ViewDescriptor};
use crate::hierarchy::{BuildOutcome, Digraph, ViewHierarchyBuilder};

use super::method::MethodBreakdown;
use super::types::{is_mutable, ClassModel, MethodModel, PropertyModel};

pub struct ClassBreakdown<'a> {
    strategies: &'a StrategyRegistry,
    hierarchy: ViewHierarchyBuilder,
}

impl<'a> ClassBreakdown<'a> {
    pub fn new(strategies: &'a StrategyRegistry, max_depth: usize) -> Self {
        Self {
            strategies,
            hierarchy: ViewHierarchyBuilder::new(max_depth),
        }
    }

    /// Break down every class of `file`, then (optionally) its top-level functions.
    pub fn breakdown_file(&self, file: &SourceFile, cx: &mut ParseContext, record_functions: bool) {
        let package = file.package.as_deref();
        for class in &file.classes {
            self.breakdown_class(class, None, package, cx);
        }
        if !record_functions {
            return;
        }
        let mut reconstructor = Reconstructor::new();
        for func in &file.functions {
            match MethodBreakdown::breakdown(func, &mut reconstructor) {
                Some(model) => {
                    cx.functions.push(model);
                    cx.diagnostics.functions += 1;
                }
                None => skip_nameless("function", cx),
            }
        }
        cx.diagnostics.record_render(&reconstructor.take_stats());
    }

    /// Break down one class and its nested classes. Nested classes are named
    /// `Outer.Inner`.
    pub fn breakdown_class(
        &self,
        class: &ClassDecl,
        outer: Option<&str>,
        package: Option<&str>,
        cx: &mut ParseContext,
    ) {
        let Some(simple) = class.name.as_deref() else {
            skip_nameless("class", cx);
            return;
        };
        let name = match outer {
            Some(outer) => format!("{outer}.{simple}"),
            None => simple.to_string(),
        };
        if cx.contains_class(&name) {
            tracing::warn!(class = %name, "duplicate class, keeping the first");
            cx.diagnostics.skipped_entities += 1;
            return;
        }

        let mut reconstructor = Reconstructor::new();
        let mut view = ViewDescriptor::default();
        let mut digraph = Digraph::new();

        let hook_cx = HookContext {
            class_name: &name,
            package,
            classes: &cx.classes,
        };
        for supertype in &class.supertypes {
            for strategy in self.strategies.strategies() {
                if strategy.recognize_supertype(supertype, &hook_cx, &mut view) {
                    tracing::debug!(class = %name, supertype = %supertype, strategy = strategy.name(), "component supertype");
                }
            }
        }

        let mut properties = Vec::with_capacity(class.constructor_params.len() + class.properties.len());
        let mut seen = FxHashSet::default();
        let mut skipped = 0usize;
        let mut hierarchy: Option<BuildOutcome> = None;

        for param in &class.constructor_params {
            match promoted_property(param) {
                Some(prop) if seen.insert(prop.name.clone()) => properties.push(prop),
                Some(prop) => {
                    tracing::debug!(class = %name, property = %prop.name, "duplicate property, keeping the first");
                    skipped += 1;
                }
                None => {}
            }
        }

        for decl in &class.properties {
            let Some(prop_name) = decl.name() else {
                tracing::warn!(class = %name, "property without a single name, skipping");
                skipped += 1;
                continue;
            };
            if !seen.insert(prop_name.to_string()) {
                tracing::debug!(class = %name, property = prop_name, "duplicate property, keeping the first");
                skipped += 1;
                continue;
            }
            properties.push(PropertyModel {
                name: prop_name.to_string(),
                type_tag: effective_type(decl),
                mutable: decl.binding.is_mutable(),
                initializer: decl
                    .initializer
                    .as_ref()
                    .map(|init| reconstructor.expr_text(init))
                    .unwrap_or_default(),
            });

            for strategy in self.strategies.strategies() {
                if strategy.recognize_binding(decl, &hook_cx, &mut view) {
                    tracing::debug!(class = %name, property = prop_name, strategy = strategy.name(), "binding recognized");
                }
                if !strategy.recognize_root(decl, &hook_cx, &mut view) {
                    continue;
                }
                if hierarchy.is_some() {
                    tracing::debug!(class = %name, property = prop_name, "builder root already handled");
                    continue;
                }
                if let Some(init) = &decl.initializer {
                    hierarchy = Some(self.build_hierarchy(
                        init,
                        strategy.as_ref(),
                        &hook_cx,
                        &mut digraph,
                        &mut view,
                    ));
                }
            }
        }

        let methods = self.breakdown_methods(&name, &class.functions, &mut reconstructor, &mut skipped);

        cx.diagnostics.classes += 1;
        cx.diagnostics.methods += methods.len();
        cx.diagnostics.properties += properties.len();
        cx.diagnostics.skipped_entities += skipped;
        cx.diagnostics.depth_limit_hits += class.depth_limited_members;
        cx.diagnostics.record_render(&reconstructor.take_stats());
        if let Some(outcome) = hierarchy {
            cx.diagnostics.ui_nodes += outcome.nodes;
            cx.diagnostics.orphan_nodes += outcome.orphans;
            cx.diagnostics.depth_limit_hits += outcome.depth_limit_hits;
        }

        tracing::debug!(
            class = %name,
            properties = properties.len(),
            methods = methods.len(),
            ui_nodes = digraph.node_count(),
            "class reconstructed"
        );
        if !digraph.is_empty() {
            tracing::trace!(class = %name, "view hierarchy:\n{}", digraph.render_tree());
        }

        cx.insert_class(
            ClassModel {
                name: name.clone(),
                superclasses: class.supertypes.clone(),
                properties,
                methods,
            },
            digraph,
            view,
        );

        for nested in &class.nested {
            self.breakdown_class(nested, Some(&name), package, cx);
        }
    }

    fn breakdown_methods(
        &self,
        class_name: &str,
        functions: &[FunctionDecl],
        reconstructor: &mut Reconstructor,
        skipped: &mut usize,
    ) -> Vec<MethodModel> {
        let mut methods = Vec::with_capacity(functions.len());
        for func in functions {
            match MethodBreakdown::breakdown(func, reconstructor) {
                Some(model) => methods.push(model),
                None => {
                    tracing::warn!(class = class_name, "method without a name, skipping");
                    *skipped += 1;
                }
            }
        }
        methods
    }

    fn build_hierarchy(
        &self,
        root: &Expr,
        strategy: &dyn FrameworkStrategy,
        hook_cx: &HookContext<'_>,
        digraph: &mut Digraph,
        view: &mut ViewDescriptor,
    ) -> BuildOutcome {
        self.hierarchy.build(root, hook_cx.class_name, digraph, &mut |node| {
            if strategy.recognize_control(node, hook_cx, view) {
                tracing::debug!(class = hook_cx.class_name, control = %node.label, "input control");
            }
        })
    }
}

fn skip_nameless(entity: &str, cx: &mut ParseContext) {
    tracing::warn!(entity, "declaration without a name, skipping");
    cx.diagnostics.skipped_entities += 1;
}

/// Constructor parameters marked `val`/`var` become properties.
fn promoted_property(param: &ParamDecl) -> Option<PropertyModel> {
    param.binding?;
    Some(PropertyModel {
        name: param.name.clone()?,
        type_tag: param
            .declared_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        mutable: is_mutable(param.binding),
        initializer: String::new(),
    })
}

/// Declared type, else the initializer's primitive type, else `unknown`.
fn effective_type(decl: &Declaration) -> String {
    if let Some(ty) = &decl.declared_type {
        return ty.clone();
    }
    match decl.initializer.as_ref().map(PrimitiveResolver::infer) {
        Some(ty) if ty != PrimitiveType::Unknown => ty.type_name().to_string(),
        _ => UNKNOWN_TYPE.to_string(),
    }
}
