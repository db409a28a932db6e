//! Reconstruction engine configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for tree lowering, reconstruction, and hierarchy building.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Recursion ceiling shared by lowering and the view hierarchy builder.
    pub max_depth: usize,
    /// Source files containing any of these markers are skipped.
    pub skip_markers: Vec<String>,
    /// Record top-level functions alongside class methods.
    pub record_top_level_functions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            skip_markers: vec![
                "ApplicationTest()".to_string(),
                "@Test".to_string(),
                "src/test".to_string(),
                "class Styles".to_string(),
            ],
            record_top_level_functions: true,
        }
    }
}

impl AnalysisConfig {
    /// Returns the first skip marker found in `source`, if any.
    pub fn skip_marker_in<'a>(&'a self, source: &str) -> Option<&'a str> {
        self.skip_markers
            .iter()
            .find(|m| !m.is_empty() && source.contains(m.as_str()))
            .map(String::as_str)
    }
}
