//! Reconstructed models of declared types.

use serde::{Deserialize, Serialize};

use crate::engine::gast::types::Binding;

/// One declared type, as reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    /// Supertype references in declaration order.
    pub superclasses: Vec<String>,
    /// Unique by name; constructor-promoted properties first.
    pub properties: Vec<PropertyModel>,
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodModel> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyModel {
    pub name: String,
    /// Declared type, else the initializer's primitive type, else `unknown`.
    pub type_tag: String,
    pub mutable: bool,
    /// Rendered initializer; empty when there is none.
    pub initializer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    pub type_tag: String,
    pub mutable: bool,
}

/// How a method body was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Block,
    Expression,
    /// Bare callable reference, e.g. `fun f() = ::g`.
    Reference,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub params: Vec<ParameterModel>,
    pub return_type: Option<String>,
    pub body_kind: BodyKind,
    /// Rendered body statements in source order; empty when the body is absent.
    pub statements: Vec<String>,
}

pub(crate) fn is_mutable(binding: Option<Binding>) -> bool {
    binding.is_some_and(Binding::is_mutable)
}
