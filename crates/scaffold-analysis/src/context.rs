//! Run-scoped store: everything one reconstruction run produces.
//!
//! A `ParseContext` is created per run, threaded by `&mut` through the
//! breakdown, and handed back to the caller. Parallel runs each own one and
//! are combined afterwards with `merge`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::breakdown::{ClassModel, MethodModel};
use crate::engine::reconstruct::RenderStats;
use crate::frameworks::ViewDescriptor;
use crate::hierarchy::Digraph;

/// Soft-failure and volume counters for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDiagnostics {
    pub files_analyzed: usize,
    pub files_skipped: usize,
    pub classes: usize,
    pub methods: usize,
    pub functions: usize,
    pub properties: usize,
    /// Top-level method and function body statements.
    pub statements: usize,
    pub raw_fallbacks: usize,
    pub ui_nodes: usize,
    pub orphan_nodes: usize,
    /// Nameless or duplicate classes, methods and properties.
    pub skipped_entities: usize,
    pub depth_limit_hits: usize,
}

impl RunDiagnostics {
    /// Merge another diagnostics into this one (additive).
    pub fn merge(&mut self, other: &RunDiagnostics) {
        self.files_analyzed += other.files_analyzed;
        self.files_skipped += other.files_skipped;
        self.classes += other.classes;
        self.methods += other.methods;
        self.functions += other.functions;
        self.properties += other.properties;
        self.statements += other.statements;
        self.raw_fallbacks += other.raw_fallbacks;
        self.ui_nodes += other.ui_nodes;
        self.orphan_nodes += other.orphan_nodes;
        self.skipped_entities += other.skipped_entities;
        self.depth_limit_hits += other.depth_limit_hits;
    }

    pub(crate) fn record_render(&mut self, stats: &RenderStats) {
        self.statements += stats.statements;
        self.raw_fallbacks += stats.raw_fallbacks;
        self.depth_limit_hits += stats.depth_limit_hits;
    }

    pub fn summary(&self) -> String {
        format!(
            "{} files ({} skipped), {} classes, {} methods, {} functions, {} statements \
             ({} raw fallbacks), {} ui nodes ({} orphans), {} skipped entities",
            self.files_analyzed,
            self.files_skipped,
            self.classes,
            self.methods,
            self.functions,
            self.statements,
            self.raw_fallbacks,
            self.ui_nodes,
            self.orphan_nodes,
            self.skipped_entities,
        )
    }
}

/// Per-view bundle handed to a test generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestClassInfo {
    pub class_name: String,
    pub import_path: String,
    pub controls: Vec<String>,
    pub digraph: Digraph,
    pub view: ViewDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseContext {
    pub classes: BTreeMap<String, ClassModel>,
    pub digraphs: BTreeMap<String, Digraph>,
    pub views: BTreeMap<String, ViewDescriptor>,
    /// Top-level functions in source order.
    pub functions: Vec<MethodModel>,
    pub diagnostics: RunDiagnostics,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Store one class's outputs together.
    pub(crate) fn insert_class(&mut self, model: ClassModel, digraph: Digraph, view: ViewDescriptor) {
        let name = model.name.clone();
        self.digraphs.insert(name.clone(), digraph);
        self.views.insert(name.clone(), view);
        self.classes.insert(name, model);
    }

    /// Fold `other` into this context. A class already present here wins;
    /// the incoming duplicate is dropped and counted as skipped. Its member
    /// counts are taken back out of the totals.
    pub fn merge(&mut self, mut other: ParseContext) {
        self.diagnostics.merge(&other.diagnostics);
        for (name, model) in std::mem::take(&mut other.classes) {
            if self.classes.contains_key(&name) {
                tracing::warn!(class = %name, "duplicate class across runs, keeping the first");
                let d = &mut self.diagnostics;
                d.skipped_entities += 1;
                d.classes = d.classes.saturating_sub(1);
                d.methods = d.methods.saturating_sub(model.methods.len());
                d.properties = d.properties.saturating_sub(model.properties.len());
                continue;
            }
            let digraph = other.digraphs.remove(&name).unwrap_or_default();
            let view = other.views.remove(&name).unwrap_or_default();
            self.insert_class(model, digraph, view);
        }
        self.functions.append(&mut other.functions);
    }

    /// Classes whose builder root was found, joined with their hierarchy and
    /// controls. Views with an empty hierarchy are logged and left out.
    pub fn test_class_infos(&self) -> Vec<TestClassInfo> {
        let mut infos = Vec::new();
        for (name, view) in &self.views {
            let Some(import_path) = &view.import_path else {
                continue;
            };
            match self.digraphs.get(name) {
                Some(digraph) if !digraph.is_empty() => infos.push(TestClassInfo {
                    class_name: name.clone(),
                    import_path: import_path.clone(),
                    controls: view.controls.clone(),
                    digraph: digraph.clone(),
                    view: view.clone(),
                }),
                _ => tracing::info!(class = %name, "missing view hierarchy, no test class info"),
            }
        }
        infos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{NodeOrigin, UiNode};

    fn class(name: &str) -> ClassModel {
        ClassModel {
            name: name.to_string(),
            superclasses: vec![],
            properties: vec![],
            methods: vec![],
        }
    }

    #[test]
    fn merge_keeps_first_duplicate() {
        let mut a = ParseContext::new();
        a.insert_class(class("Shared"), Digraph::new(), ViewDescriptor::default());
        a.diagnostics.classes = 1;

        let mut b = ParseContext::new();
        let mut view = ViewDescriptor::default();
        view.kind = Some("View".into());
        b.insert_class(class("Shared"), Digraph::new(), view);
        b.insert_class(class("Other"), Digraph::new(), ViewDescriptor::default());
        b.diagnostics.classes = 2;

        a.merge(b);
        assert_eq!(a.classes.len(), 2);
        assert!(a.views["Shared"].kind.is_none());
        assert_eq!(a.diagnostics.classes, 2);
        assert_eq!(a.diagnostics.skipped_entities, 1);
        assert_eq!(a.digraphs.len(), 2);
    }

    #[test]
    fn merge_takes_duplicate_members_out_of_counts() {
        let mut shared = class("Shared");
        shared.methods.push(MethodModel {
            name: "run".into(),
            params: vec![],
            return_type: None,
            body_kind: crate::breakdown::BodyKind::Absent,
            statements: vec![],
        });
        let mut a = ParseContext::new();
        a.insert_class(shared.clone(), Digraph::new(), ViewDescriptor::default());
        a.diagnostics.classes = 1;
        a.diagnostics.methods = 1;

        let mut b = ParseContext::new();
        b.insert_class(shared, Digraph::new(), ViewDescriptor::default());
        b.diagnostics.classes = 1;
        b.diagnostics.methods = 1;

        a.merge(b);
        assert_eq!(a.classes.len(), 1);
        assert_eq!(a.diagnostics.classes, 1);
        assert_eq!(a.diagnostics.methods, 1);
        assert_eq!(a.diagnostics.skipped_entities, 1);
    }

    #[test]
    fn test_class_infos_require_import_and_hierarchy() {
        let mut cx = ParseContext::new();
        let mut graph = Digraph::new();
        graph.add_node(UiNode::new("vbox", 0, NodeOrigin::new()));
        let view = ViewDescriptor {
            import_path: Some("app.Main".into()),
            controls: vec!["button".into()],
            ..Default::default()
        };
        cx.insert_class(class("Main"), graph, view.clone());
        cx.insert_class(class("Empty"), Digraph::new(), ViewDescriptor {
            import_path: Some("app.Empty".into()),
            ..Default::default()
        });
        cx.insert_class(class("Plain"), Digraph::new(), ViewDescriptor::default());

        let infos = cx.test_class_infos();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].class_name, "Main");
        assert_eq!(infos[0].import_path, "app.Main");
        assert_eq!(infos[0].controls, vec!["button"]);
    }

    #[test]
    fn summary_mentions_counts() {
        let d = RunDiagnostics {
            files_analyzed: 2,
            classes: 3,
            raw_fallbacks: 1,
            ..Default::default()
        };
        let s = d.summary();
        assert!(s.starts_with("2 files (0 skipped), 3 classes"));
        assert!(s.contains("(1 raw fallbacks)"));
    }
}
