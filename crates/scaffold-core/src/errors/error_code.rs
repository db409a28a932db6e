//! Stable error codes surfaced to callers and logs.

/// Every scaffold error maps to a stable, machine-readable code.
pub trait ScaffoldErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message` form used in log lines.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MISSING_TREE: &str = "MISSING_TREE";
pub const NOT_A_FILE: &str = "NOT_A_FILE";
pub const FRONTEND_ERROR: &str = "FRONTEND_ERROR";
pub const INVALID_TREE: &str = "INVALID_TREE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STRATEGY_ERROR: &str = "STRATEGY_ERROR";
