//! Typed GAST node variants.
//!
//! Every shape the engine does not recognize lowers to an `Unknown` arm that
//! carries the node's raw text, so dispatch over these types is total.

use serde::{Deserialize, Serialize};

use super::operators::BinaryOperator;

/// Node kind recorded on `Unknown` arms produced by the recursion ceiling.
pub const DEPTH_LIMIT_KIND: &str = "depth_limit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralForm {
    Int,
    Float,
    Bool,
    Str,
    Char,
    Null,
    /// Literal whose form the front end could not determine.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub form: LiteralForm,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lambda {
    /// Declared parameters; empty for implicit `it` lambdas.
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Unary {
        op: String,
        operand: Box<Expr>,
        postfix: bool,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Argument>,
        lambda: Option<Box<Lambda>>,
    },
    /// Dot-joined identifier chain.
    Reference { segments: Vec<String> },
    Lambda(Box<Lambda>),
    Collection { elements: Vec<Expr> },
    CallableRef {
        receiver: Option<String>,
        name: String,
    },
    Return { value: Option<Box<Expr>> },
    Paren(Box<Expr>),
    Unknown { kind: String, raw: String },
}

impl Expr {
    pub fn reference(name: impl Into<String>) -> Self {
        Expr::Reference {
            segments: vec![name.into()],
        }
    }

    pub fn unknown(kind: impl Into<String>, raw: impl Into<String>) -> Self {
        Expr::Unknown {
            kind: kind.into(),
            raw: raw.into(),
        }
    }

    /// The trailing lambda when this is a builder-style call.
    pub fn builder_lambda(&self) -> Option<&Lambda> {
        match self {
            Expr::Call {
                lambda: Some(lambda),
                ..
            } => Some(lambda),
            _ => None,
        }
    }

    /// Identifier text when this is a plain reference chain.
    pub fn reference_text(&self) -> Option<String> {
        match self {
            Expr::Reference { segments } => Some(segments.join(".")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    Val,
    Var,
}

impl Binding {
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "val" => Some(Binding::Val),
            "var" => Some(Binding::Var),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Binding::Val => "val",
            Binding::Var => "var",
        }
    }

    pub fn is_mutable(self) -> bool {
        matches!(self, Binding::Var)
    }
}

/// A local variable or property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub binding: Binding,
    /// One name for plain declarations, several for destructuring.
    pub names: Vec<String>,
    pub destructuring: bool,
    pub declared_type: Option<String>,
    pub initializer: Option<Expr>,
}

impl Declaration {
    /// Name of a plain (non-destructuring) declaration.
    pub fn name(&self) -> Option<&str> {
        if self.destructuring {
            None
        } else {
            self.names.first().map(String::as_str)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    Declaration(Declaration),
    Expression(Expr),
    Block(Vec<Stmt>),
    Unknown { kind: String, raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: Option<String>,
    pub declared_type: Option<String>,
    /// Present when a constructor parameter is promoted to a property.
    pub binding: Option<Binding>,
}

/// How a function body was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionBody {
    /// `fun f() { ... }`
    Block(Vec<Stmt>),
    /// `fun f() = expr`
    Expression(Expr),
    /// `fun f() = ::g`, a bare reference without call parentheses.
    Reference(Expr),
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Option<String>,
    pub params: Vec<ParamDecl>,
    pub return_type: Option<String>,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: Option<String>,
    pub supertypes: Vec<String>,
    pub constructor_params: Vec<ParamDecl>,
    pub properties: Vec<Declaration>,
    pub functions: Vec<FunctionDecl>,
    pub nested: Vec<ClassDecl>,
    /// Nested classes dropped by the recursion ceiling.
    pub depth_limited_members: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceFile {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub classes: Vec<ClassDecl>,
    pub functions: Vec<FunctionDecl>,
    pub properties: Vec<Declaration>,
}
