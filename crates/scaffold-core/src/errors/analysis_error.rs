//! Hard failures of a reconstruction run.
//!
//! Soft failures (unknown node shapes, nameless entities, orphan UI nodes) are
//! never raised; they are logged and counted in the run diagnostics instead.

use super::error_code::{self, ScaffoldErrorCode};

/// Errors that abort analysis of a whole input tree.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("no syntax tree was supplied")]
    MissingTree,

    #[error("root node must be a `file` node, found `{kind}`")]
    NotAFile { kind: String },

    #[error("front-end failed to parse {path}: {message}")]
    Frontend { path: String, message: String },

    #[error("syntax tree is not valid JSON: {message}")]
    InvalidTree { message: String },
}

impl ScaffoldErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTree => error_code::MISSING_TREE,
            Self::NotAFile { .. } => error_code::NOT_A_FILE,
            Self::Frontend { .. } => error_code::FRONTEND_ERROR,
            Self::InvalidTree { .. } => error_code::INVALID_TREE,
        }
    }
}
