//! Analyzer: the entry point tying lowering, breakdown and strategies together.
//!
//! One call = one run into a caller-owned `ParseContext`. Multi-file batches
//! run every file in its own context (in parallel) and merge afterwards in
//! input order.

use std::time::Instant;

use rayon::prelude::*;
use scaffold_core::config::{AnalysisConfig, ScaffoldConfig};
use scaffold_core::errors::AnalysisError;
use scaffold_core::ScaffoldErrorCode;

use crate::breakdown::ClassBreakdown;
use crate::context::ParseContext;
use crate::engine::gast::{BaseNormalizer, GastNormalizer};
use crate::frameworks::StrategyRegistry;
use crate::parsers::KotlinFrontend;
use crate::syntax::SyntaxNode;

/// Outcome of a multi-file run.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub context: ParseContext,
    /// Files that failed hard, in input order.
    pub failures: Vec<(String, AnalysisError)>,
}

#[derive(Debug)]
pub struct Analyzer {
    config: AnalysisConfig,
    strategies: StrategyRegistry,
    normalizer: BaseNormalizer,
    frontend: KotlinFrontend,
}

impl Analyzer {
    /// Strategies are selected from `config.frameworks`.
    pub fn new(config: &ScaffoldConfig) -> Self {
        Self::with_strategies(&config.analysis, StrategyRegistry::from_config(&config.frameworks))
    }

    pub fn with_strategies(config: &AnalysisConfig, strategies: StrategyRegistry) -> Self {
        Self {
            config: config.clone(),
            strategies,
            normalizer: BaseNormalizer::new(config.max_depth),
            frontend: KotlinFrontend::new(config.max_depth),
        }
    }

    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }

    /// Reconstruct one generic tree into `cx`. Only a missing tree or a root
    /// that is not a file node fails; everything else degrades.
    pub fn analyze_tree(&self, root: Option<&SyntaxNode>, cx: &mut ParseContext) -> Result<(), AnalysisError> {
        let root = root.ok_or(AnalysisError::MissingTree)?;
        let file = self.normalizer.normalize_file(root)?;
        ClassBreakdown::new(&self.strategies, self.config.max_depth).breakdown_file(
            &file,
            cx,
            self.config.record_top_level_functions,
        );
        cx.diagnostics.files_analyzed += 1;
        Ok(())
    }

    /// Single-tree convenience: a fresh context holding just this run.
    pub fn run_tree(&self, root: &SyntaxNode) -> Result<ParseContext, AnalysisError> {
        let mut cx = ParseContext::new();
        self.analyze_tree(Some(root), &mut cx)?;
        Ok(cx)
    }

    /// Reconstruct a JSON-serialized generic tree. `null` is a missing tree.
    pub fn analyze_json(&self, json: &str, cx: &mut ParseContext) -> Result<(), AnalysisError> {
        let root: Option<SyntaxNode> =
            serde_json::from_str(json).map_err(|e| AnalysisError::InvalidTree {
                message: e.to_string(),
            })?;
        self.analyze_tree(root.as_ref(), cx)
    }

    /// Parse Kotlin `source` and reconstruct it into `cx`. Returns `Ok(false)`
    /// when a skip marker excluded the file.
    pub fn analyze_source(&self, path: &str, source: &str, cx: &mut ParseContext) -> Result<bool, AnalysisError> {
        if let Some(marker) = self.config.skip_marker_in(source) {
            tracing::info!(path, marker, "skipping file");
            cx.diagnostics.files_skipped += 1;
            return Ok(false);
        }
        let tree = self.frontend.parse(source, path)?;
        self.analyze_tree(Some(&tree), cx)?;
        tracing::debug!(path, "file analyzed");
        Ok(true)
    }

    /// Analyze `(path, source)` pairs, each in an isolated context, then merge
    /// in input order. A file that fails is reported and does not stop the rest.
    pub fn analyze_sources(&self, sources: &[(String, String)]) -> BatchResult {
        let start = Instant::now();
        let runs: Vec<(ParseContext, Option<AnalysisError>)> = sources
            .par_iter()
            .map(|(path, source)| {
                let mut cx = ParseContext::new();
                let err = self.analyze_source(path, source, &mut cx).err();
                (cx, err)
            })
            .collect();

        let mut batch = BatchResult::default();
        for ((path, _), (cx, err)) in sources.iter().zip(runs) {
            if let Some(err) = err {
                tracing::warn!(path = %path, error = %err.coded_message(), "file failed");
                batch.failures.push((path.clone(), err));
            }
            batch.context.merge(cx);
        }

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "{}",
            batch.context.diagnostics.summary()
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::build;

    fn analyzer() -> Analyzer {
        Analyzer::with_strategies(&AnalysisConfig::default(), StrategyRegistry::with_builtins())
    }

    #[test]
    fn missing_tree_is_a_hard_failure() {
        let mut cx = ParseContext::new();
        let err = analyzer().analyze_tree(None, &mut cx).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_TREE");
        assert!(matches!(
            analyzer().analyze_json("null", &mut cx),
            Err(AnalysisError::MissingTree)
        ));
    }

    #[test]
    fn malformed_json_is_invalid_tree() {
        let mut cx = ParseContext::new();
        assert!(matches!(
            analyzer().analyze_json("{\"kind\":", &mut cx),
            Err(AnalysisError::InvalidTree { .. })
        ));
    }

    #[test]
    fn json_tree_round_trips_through_the_engine() {
        let tree = build::file(
            None,
            vec![build::class("A", &[], vec![], vec![build::property("val", "x", None, Some(build::int("1")))])],
        );
        let json = serde_json::to_string(&tree).unwrap();
        let mut cx = ParseContext::new();
        analyzer().analyze_json(&json, &mut cx).unwrap();
        assert_eq!(cx.classes["A"].properties[0].type_tag, "Int");
        assert_eq!(cx.diagnostics.files_analyzed, 1);
    }

    #[test]
    fn skip_marker_excludes_source() {
        let mut cx = ParseContext::new();
        let analyzed = analyzer()
            .analyze_source("FooTest.kt", "class FooTest : ApplicationTest() {}", &mut cx)
            .unwrap();
        assert!(!analyzed);
        assert_eq!(cx.diagnostics.files_skipped, 1);
        assert!(cx.classes.is_empty());
    }
}
