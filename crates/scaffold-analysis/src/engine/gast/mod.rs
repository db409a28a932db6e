//! Generic AST (GAST): typed syntactic categories lowered from the generic tree.

pub mod base_normalizer;
pub mod operators;
pub mod types;

pub use base_normalizer::{BaseNormalizer, GastNormalizer};
pub use operators::BinaryOperator;
pub use types::{
    Argument, Binding, ClassDecl, Declaration, Expr, FunctionBody, FunctionDecl, Lambda,
    Literal, LiteralForm, ParamDecl, SourceFile, Stmt,
};
