//! Framework strategy pack errors.

use super::error_code::{self, ScaffoldErrorCode};

/// Errors raised while loading framework strategy packs.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("invalid strategy pack {pack}: {message}")]
    InvalidPack { pack: String, message: String },

    #[error("failed to read strategy pack {path}: {message}")]
    Io { path: String, message: String },
}

impl ScaffoldErrorCode for StrategyError {
    fn error_code(&self) -> &'static str {
        error_code::STRATEGY_ERROR
    }
}
