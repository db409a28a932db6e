//! Literal resolution: primitive type tag plus rendered literal text.

use serde::{Deserialize, Serialize};

use crate::engine::gast::types::{Expr, Literal, LiteralForm};

/// Type tag used when nothing better can be inferred.
pub const UNKNOWN_TYPE: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Int,
    Long,
    Double,
    Float,
    Boolean,
    String,
    Char,
    Null,
    Unknown,
}

impl PrimitiveType {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Char => "Char",
            Self::Null => "Nothing?",
            Self::Unknown => UNKNOWN_TYPE,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Long | Self::Double | Self::Float)
    }
}

pub struct PrimitiveResolver;

impl PrimitiveResolver {
    /// Resolve a literal to its type tag and literal text. Never fails:
    /// unrecognized shapes yield `Unknown` with the raw text.
    pub fn resolve(literal: &Literal) -> (PrimitiveType, String) {
        let value = literal.value.trim();
        match literal.form {
            LiteralForm::Int => {
                let ty = if value.ends_with(['L', 'l']) {
                    PrimitiveType::Long
                } else {
                    PrimitiveType::Int
                };
                (ty, value.to_string())
            }
            LiteralForm::Float => {
                let ty = if value.ends_with(['f', 'F']) {
                    PrimitiveType::Float
                } else {
                    PrimitiveType::Double
                };
                (ty, value.to_string())
            }
            LiteralForm::Bool => match value {
                "true" | "false" => (PrimitiveType::Boolean, value.to_string()),
                _ => (PrimitiveType::Unknown, value.to_string()),
            },
            LiteralForm::Str => (PrimitiveType::String, quote(value, '"')),
            LiteralForm::Char => (PrimitiveType::Char, quote(value, '\'')),
            LiteralForm::Null => (PrimitiveType::Null, "null".to_string()),
            LiteralForm::Unknown => (PrimitiveType::Unknown, value.to_string()),
        }
    }

    /// Primitive type of an initializer expression, if it is a literal.
    pub fn infer(expr: &Expr) -> PrimitiveType {
        match expr {
            Expr::Literal(lit) => Self::resolve(lit).0,
            Expr::Paren(inner) => Self::infer(inner),
            Expr::Unary {
                op,
                operand,
                postfix: false,
            } => {
                let inner = Self::infer(operand);
                match op.as_str() {
                    "-" | "+" if inner.is_numeric() => inner,
                    "!" if inner == PrimitiveType::Boolean => inner,
                    _ => PrimitiveType::Unknown,
                }
            }
            _ => PrimitiveType::Unknown,
        }
    }
}

/// Wrap `value` in `mark` unless it already is (or is a raw `"""` string).
fn quote(value: &str, mark: char) -> String {
    let already = value.len() >= 2 && value.starts_with(mark) && value.ends_with(mark);
    if already {
        value.to_string()
    } else {
        format!("{mark}{value}{mark}")
    }
}
