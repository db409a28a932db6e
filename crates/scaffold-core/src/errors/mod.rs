//! Error types for every scaffold subsystem.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod strategy_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use strategy_error::StrategyError;
