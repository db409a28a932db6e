//! Binary operator tokens and their canonical textual form.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    NotEq,
    Identical,
    NotIdentical,
    Lt,
    LtEq,
    Gt,
    GtEq,
    // Logical
    And,
    Or,
    // Assignment and compound assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    // Member access
    Dot,
    SafeDot,
    // Kotlin specifics
    Range,
    Elvis,
    In,
    NotIn,
    Is,
    NotIs,
    As,
    SafeAs,
    /// Infix function call (`a to b`) or any token not listed above.
    Custom(String),
}

impl BinaryOperator {
    /// Map an operator token to an operator.
    ///
    /// Accepts both the symbol (`+`) and the upper-case token name (`ADD`)
    /// that tree dumps commonly use.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "+" | "ADD" | "PLUS" => Self::Add,
            "-" | "SUB" | "MINUS" => Self::Sub,
            "*" | "MUL" | "TIMES" => Self::Mul,
            "/" | "DIV" => Self::Div,
            "%" | "MOD" | "REM" => Self::Mod,
            "==" | "EQ" => Self::Eq,
            "!=" | "NEQ" => Self::NotEq,
            "===" | "IDENTITY" => Self::Identical,
            "!==" | "NOT_IDENTITY" => Self::NotIdentical,
            "<" | "LT" => Self::Lt,
            "<=" | "LTE" => Self::LtEq,
            ">" | "GT" => Self::Gt,
            ">=" | "GTE" => Self::GtEq,
            "&&" | "AND" => Self::And,
            "||" | "OR" => Self::Or,
            "=" | "ASSN" | "ASSIGN" => Self::Assign,
            "+=" | "ADD_ASSN" => Self::AddAssign,
            "-=" | "SUB_ASSN" => Self::SubAssign,
            "*=" | "MUL_ASSN" => Self::MulAssign,
            "/=" | "DIV_ASSN" => Self::DivAssign,
            "%=" | "MOD_ASSN" => Self::ModAssign,
            "." | "DOT" => Self::Dot,
            "?." | "DOT_SAFE" | "SAFE_DOT" => Self::SafeDot,
            ".." | "RANGE" => Self::Range,
            "?:" | "ELVIS" => Self::Elvis,
            "in" | "IN" => Self::In,
            "!in" | "NOT_IN" => Self::NotIn,
            "is" | "IS" => Self::Is,
            "!is" | "NOT_IS" => Self::NotIs,
            "as" | "AS" => Self::As,
            "as?" | "AS_SAFE" => Self::SafeAs,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Identical => "===",
            Self::NotIdentical => "!==",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::Dot => ".",
            Self::SafeDot => "?.",
            Self::Range => "..",
            Self::Elvis => "?:",
            Self::In => "in",
            Self::NotIn => "!in",
            Self::Is => "is",
            Self::NotIs => "!is",
            Self::As => "as",
            Self::SafeAs => "as?",
            Self::Custom(token) => token,
        }
    }

    /// Member access and ranges render without surrounding spaces.
    pub fn is_spaced(&self) -> bool {
        !matches!(self, Self::Dot | Self::SafeDot | Self::Range)
    }

    pub fn is_member_access(&self) -> bool {
        matches!(self, Self::Dot | Self::SafeDot)
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Self::As | Self::SafeAs)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
