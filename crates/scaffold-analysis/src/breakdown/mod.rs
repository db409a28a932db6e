//! Breakdown of declared types into class models.
//!
//! - `types.rs`: `ClassModel`, `PropertyModel`, `MethodModel`, `ParameterModel`
//! - `method.rs`: MethodBreakdown
//! - `class.rs`: ClassBreakdown, including strategy hooks and the view hierarchy

pub mod class;
pub mod method;
pub mod types;

pub use class::ClassBreakdown;
pub use method::MethodBreakdown;
pub use types::{BodyKind, ClassModel, MethodModel, ParameterModel, PropertyModel};
