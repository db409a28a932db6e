//! Base normalizer: lowers the generic syntax tree into typed GAST nodes.
//!
//! Lowering is total for expressions and statements. Unrecognized shapes
//! become `Unknown` arms carrying raw text; only a root that is not a file
//! node is a hard failure.

use scaffold_core::errors::AnalysisError;

use crate::syntax::kinds::{self, field};
use crate::syntax::SyntaxNode;

use super::operators::BinaryOperator;
use super::types::{
    Argument, Binding, ClassDecl, Declaration, Expr, FunctionBody, FunctionDecl, Lambda,
    Literal, LiteralForm, ParamDecl, SourceFile, Stmt, DEPTH_LIMIT_KIND,
};

/// Trait for GAST normalizers.
///
/// Default methods understand the canonical node kinds in [`crate::syntax::kinds`].
/// A front end with a different vocabulary overrides the methods it needs.
pub trait GastNormalizer: Send + Sync {
    /// Recursion ceiling for nested expressions and statements.
    fn max_depth(&self) -> usize;

    /// Lower a whole file.
    fn normalize_file(&self, root: &SyntaxNode) -> Result<SourceFile, AnalysisError> {
        if !root.is(kinds::FILE) {
            return Err(AnalysisError::NotAFile {
                kind: root.kind.clone(),
            });
        }

        let mut file = SourceFile::default();
        for child in &root.children {
            match child.kind.as_str() {
                kinds::PACKAGE => {
                    let package = child.text.trim();
                    if !package.is_empty() {
                        file.package = Some(package.to_string());
                    }
                }
                kinds::IMPORT => file.imports.push(child.text.trim().to_string()),
                kinds::CLASS => file.classes.push(self.normalize_class(child, 0)),
                kinds::FUNCTION => file.functions.push(self.normalize_function(child, 0)),
                kinds::PROPERTY => file.properties.push(self.normalize_declaration(child, 0)),
                other => tracing::debug!(kind = other, "skipping top-level node"),
            }
        }
        Ok(file)
    }

    fn normalize_class(&self, node: &SyntaxNode, depth: usize) -> ClassDecl {
        let supertypes = node
            .child_by_field(field::SUPERTYPES)
            .map(|s| s.children.iter().filter_map(supertype_name).collect())
            .unwrap_or_default();
        let constructor_params = node
            .child_by_field(field::CONSTRUCTOR)
            .map(|c| {
                c.children_of_kind(kinds::PARAM)
                    .map(|p| self.normalize_param(p))
                    .collect()
            })
            .unwrap_or_default();

        let mut class = ClassDecl {
            name: node.field_text(field::NAME).map(str::to_string),
            supertypes,
            constructor_params,
            properties: Vec::new(),
            functions: Vec::new(),
            nested: Vec::new(),
            depth_limited_members: 0,
        };

        let Some(body) = node.child_by_field(field::BODY) else {
            return class;
        };
        for member in &body.children {
            match member.kind.as_str() {
                kinds::PROPERTY => class
                    .properties
                    .push(self.normalize_declaration(member, depth + 1)),
                kinds::FUNCTION => class
                    .functions
                    .push(self.normalize_function(member, depth + 1)),
                kinds::CLASS if depth < self.max_depth() => {
                    class.nested.push(self.normalize_class(member, depth + 1))
                }
                kinds::CLASS => {
                    tracing::warn!(limit = self.max_depth(), "nested class depth ceiling reached");
                    class.depth_limited_members += 1;
                }
                other => tracing::debug!(kind = other, "skipping class member"),
            }
        }
        class
    }

    fn normalize_param(&self, node: &SyntaxNode) -> ParamDecl {
        ParamDecl {
            name: node.field_text(field::NAME).map(str::to_string),
            declared_type: node.field_text(field::TYPE).map(str::to_string),
            binding: node.field_text(field::BINDING).and_then(Binding::parse),
        }
    }

    fn normalize_function(&self, node: &SyntaxNode, depth: usize) -> FunctionDecl {
        let params = node
            .child_by_field(field::PARAMS)
            .map(|p| {
                p.children_of_kind(kinds::PARAM)
                    .map(|p| self.normalize_param(p))
                    .collect()
            })
            .unwrap_or_default();

        // Block wrapper wins, then a bare reference, then any single expression.
        let body = match node.child_by_field(field::BODY) {
            None => FunctionBody::Absent,
            Some(b) if b.is(kinds::BLOCK) => FunctionBody::Block(self.normalize_block(b, depth + 1)),
            Some(b) if is_bare_reference(b) => {
                FunctionBody::Reference(self.normalize_expr(b, depth + 1))
            }
            Some(b) => FunctionBody::Expression(self.normalize_expr(b, depth + 1)),
        };

        FunctionDecl {
            name: node.field_text(field::NAME).map(str::to_string),
            params,
            return_type: node.field_text(field::TYPE).map(str::to_string),
            body,
        }
    }

    /// Lower every statement of a block. Output length always equals input length.
    fn normalize_block(&self, node: &SyntaxNode, depth: usize) -> Vec<Stmt> {
        node.children
            .iter()
            .map(|c| self.normalize_stmt(c, depth))
            .collect()
    }

    fn normalize_stmt(&self, node: &SyntaxNode, depth: usize) -> Stmt {
        if depth > self.max_depth() {
            tracing::warn!(limit = self.max_depth(), kind = %node.kind, "statement depth ceiling reached");
            return Stmt::Unknown {
                kind: DEPTH_LIMIT_KIND.to_string(),
                raw: node.raw_text(),
            };
        }
        match node.kind.as_str() {
            kinds::PROPERTY => Stmt::Declaration(self.normalize_declaration(node, depth)),
            kinds::BLOCK => Stmt::Block(self.normalize_block(node, depth + 1)),
            k if is_expression_kind(k) => Stmt::Expression(self.normalize_expr(node, depth)),
            other => Stmt::Unknown {
                kind: other.to_string(),
                raw: node.raw_text(),
            },
        }
    }

    fn normalize_declaration(&self, node: &SyntaxNode, depth: usize) -> Declaration {
        let binding = node
            .field_text(field::BINDING)
            .and_then(Binding::parse)
            .unwrap_or(Binding::Val);

        let (names, destructuring) = match node.child_by_field(field::DESTRUCTURE) {
            Some(targets) => (
                targets
                    .children
                    .iter()
                    .map(|t| t.text.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
                true,
            ),
            None => (
                node.field_text(field::NAME)
                    .map(|n| vec![n.to_string()])
                    .unwrap_or_default(),
                false,
            ),
        };

        Declaration {
            binding,
            names,
            destructuring,
            declared_type: node.field_text(field::TYPE).map(str::to_string),
            initializer: node
                .child_by_field(field::VALUE)
                .map(|v| self.normalize_expr(v, depth + 1)),
        }
    }

    fn normalize_expr(&self, node: &SyntaxNode, depth: usize) -> Expr {
        if depth > self.max_depth() {
            tracing::warn!(limit = self.max_depth(), kind = %node.kind, "expression depth ceiling reached");
            return Expr::unknown(DEPTH_LIMIT_KIND, node.raw_text());
        }
        let next = depth + 1;

        match node.kind.as_str() {
            kinds::INT => literal(LiteralForm::Int, node),
            kinds::FLOAT => literal(LiteralForm::Float, node),
            kinds::BOOL => literal(LiteralForm::Bool, node),
            kinds::STRING => literal(LiteralForm::Str, node),
            kinds::CHAR => literal(LiteralForm::Char, node),
            kinds::NULL => literal(LiteralForm::Null, node),
            kinds::LITERAL => literal(LiteralForm::Unknown, node),

            kinds::NAME => {
                let ident = node.text.trim();
                if ident.is_empty() {
                    Expr::unknown(&node.kind, node.raw_text())
                } else {
                    Expr::reference(ident)
                }
            }

            kinds::MEMBER => self.normalize_member(node, next),

            kinds::BINARY => {
                let left = node.child_by_field(field::LEFT);
                let right = node.child_by_field(field::RIGHT);
                let op = node.field_text(field::OP);
                match (left, op, right) {
                    (Some(l), Some(op), Some(r)) => binary(
                        self.normalize_expr(l, next),
                        BinaryOperator::from_token(op),
                        self.normalize_expr(r, next),
                    ),
                    _ => Expr::unknown(&node.kind, node.raw_text()),
                }
            }

            kinds::UNARY => match (node.field_text(field::OP), node.child_by_field(field::OPERAND)) {
                (Some(op), Some(operand)) => Expr::Unary {
                    op: op.to_string(),
                    operand: Box::new(self.normalize_expr(operand, next)),
                    postfix: node.child_by_field(field::POSTFIX).is_some(),
                },
                _ => Expr::unknown(&node.kind, node.raw_text()),
            },

            kinds::CALL => {
                let Some(callee) = node.child_by_field(field::CALLEE) else {
                    return Expr::unknown(&node.kind, node.raw_text());
                };
                let args = node
                    .child_by_field(field::ARGS)
                    .map(|a| a.children.iter().map(|c| self.normalize_arg(c, next)).collect())
                    .unwrap_or_default();
                let lambda = node
                    .child_by_field(field::LAMBDA)
                    .map(|l| Box::new(self.normalize_lambda(l, next)));
                Expr::Call {
                    callee: Box::new(self.normalize_expr(callee, next)),
                    args,
                    lambda,
                }
            }

            kinds::LAMBDA => Expr::Lambda(Box::new(self.normalize_lambda(node, next))),

            kinds::COLLECTION => Expr::Collection {
                elements: node
                    .children
                    .iter()
                    .map(|e| self.normalize_expr(e, next))
                    .collect(),
            },

            kinds::CALLABLE_REF => match node.field_text(field::NAME) {
                Some(target) => Expr::CallableRef {
                    receiver: node.field_text(field::RECEIVER).map(str::to_string),
                    name: target.to_string(),
                },
                None => Expr::unknown(&node.kind, node.raw_text()),
            },

            kinds::RETURN => Expr::Return {
                value: node
                    .child_by_field(field::VALUE)
                    .map(|v| Box::new(self.normalize_expr(v, next))),
            },

            kinds::PAREN => match node.children.first() {
                Some(inner) => Expr::Paren(Box::new(self.normalize_expr(inner, next))),
                None => Expr::unknown(&node.kind, node.raw_text()),
            },

            other => Expr::unknown(other, node.raw_text()),
        }
    }

    /// Member chains of plain identifiers become a reference; anything else
    /// folds left into `.` binary operations.
    fn normalize_member(&self, node: &SyntaxNode, depth: usize) -> Expr {
        if node.children.is_empty() {
            let segments: Vec<String> = node
                .text
                .split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if segments.is_empty() {
                return Expr::unknown(&node.kind, node.raw_text());
            }
            return Expr::Reference { segments };
        }

        let mut parts = node.children.iter().map(|c| self.normalize_expr(c, depth));
        let Some(first) = parts.next() else {
            return Expr::unknown(&node.kind, node.raw_text());
        };
        parts.fold(first, |acc, part| binary(acc, BinaryOperator::Dot, part))
    }

    fn normalize_arg(&self, node: &SyntaxNode, depth: usize) -> Argument {
        if node.is(kinds::ARG) {
            let value = node
                .child_by_field(field::VALUE)
                .or_else(|| node.positional_children().next())
                .map(|v| self.normalize_expr(v, depth))
                .unwrap_or_else(|| Expr::unknown(&node.kind, node.raw_text()));
            return Argument {
                name: node.field_text(field::NAME).map(str::to_string),
                value,
            };
        }
        Argument {
            name: None,
            value: self.normalize_expr(node, depth),
        }
    }

    fn normalize_lambda(&self, node: &SyntaxNode, depth: usize) -> Lambda {
        let params = node
            .child_by_field(field::PARAMS)
            .map(|p| {
                p.children
                    .iter()
                    .filter_map(|param| {
                        param
                            .field_text(field::NAME)
                            .or_else(|| Some(param.text.trim()).filter(|t| !t.is_empty()))
                            .map(str::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let body = match node.child_by_field(field::BODY) {
            Some(b) if b.is(kinds::BLOCK) => self.normalize_block(b, depth + 1),
            Some(b) => vec![self.normalize_stmt(b, depth + 1)],
            None => node
                .positional_children()
                .map(|s| self.normalize_stmt(s, depth + 1))
                .collect(),
        };

        Lambda { params, body }
    }
}

/// Base normalizer that uses the default trait implementations.
#[derive(Debug, Clone)]
pub struct BaseNormalizer {
    max_depth: usize,
}

impl BaseNormalizer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for BaseNormalizer {
    fn default() -> Self {
        Self::new(scaffold_core::config::analysis_config::DEFAULT_MAX_DEPTH)
    }
}

impl GastNormalizer for BaseNormalizer {
    fn max_depth(&self) -> usize {
        self.max_depth
    }
}

// ---- Helper functions ----

fn literal(form: LiteralForm, node: &SyntaxNode) -> Expr {
    Expr::Literal(Literal {
        form,
        value: node.text.trim().to_string(),
    })
}

/// Build a binary node, merging `a.b` of two references into one chain.
fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    if op == BinaryOperator::Dot {
        if let (Expr::Reference { segments: l }, Expr::Reference { segments: r }) = (&left, &right) {
            let mut segments = l.clone();
            segments.extend(r.iter().cloned());
            return Expr::Reference { segments };
        }
    }
    Expr::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

fn supertype_name(node: &SyntaxNode) -> Option<String> {
    let target = match node.kind.as_str() {
        kinds::SUPERTYPE => node.children.first().unwrap_or(node),
        _ => node,
    };
    let text = match target.kind.as_str() {
        kinds::CALL => target
            .child_by_field(field::CALLEE)
            .map(plain_text)
            .unwrap_or_default(),
        _ => plain_text(target),
    };
    Some(text).filter(|t| !t.is_empty())
}

fn plain_text(node: &SyntaxNode) -> String {
    if node.is(kinds::MEMBER) && !node.children.is_empty() {
        return node
            .children
            .iter()
            .map(|c| c.text.trim())
            .collect::<Vec<_>>()
            .join(".");
    }
    node.text.trim().to_string()
}

fn is_bare_reference(node: &SyntaxNode) -> bool {
    matches!(
        node.kind.as_str(),
        kinds::CALLABLE_REF | kinds::NAME | kinds::MEMBER
    )
}

fn is_expression_kind(kind: &str) -> bool {
    matches!(
        kind,
        kinds::INT
            | kinds::FLOAT
            | kinds::BOOL
            | kinds::STRING
            | kinds::CHAR
            | kinds::NULL
            | kinds::LITERAL
            | kinds::NAME
            | kinds::MEMBER
            | kinds::BINARY
            | kinds::UNARY
            | kinds::CALL
            | kinds::LAMBDA
            | kinds::COLLECTION
            | kinds::CALLABLE_REF
            | kinds::RETURN
            | kinds::PAREN
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::build;

    #[test]
    fn non_file_root_is_rejected() {
        let err = BaseNormalizer::default()
            .normalize_file(&build::block(vec![]))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NotAFile { ref kind } if kind == "block"));
    }

    #[test]
    fn dot_of_references_collapses_to_chain() {
        let node = build::binary(build::member(&["a", "b"]), "DOT", build::name("c"));
        let expr = BaseNormalizer::default().normalize_expr(&node, 0);
        assert_eq!(
            expr,
            Expr::Reference {
                segments: vec!["a".into(), "b".into(), "c".into()]
            }
        );
    }

    #[test]
    fn function_body_classification() {
        let n = BaseNormalizer::default();
        let block = build::function("a", vec![], None, Some(build::block(vec![])));
        let expr = build::function("b", vec![], None, Some(build::int("1")));
        let reference = build::function("c", vec![], None, Some(build::callable_ref(None, "d")));
        let absent = build::function("e", vec![], None, None);
        assert!(matches!(n.normalize_function(&block, 0).body, FunctionBody::Block(_)));
        assert!(matches!(n.normalize_function(&expr, 0).body, FunctionBody::Expression(_)));
        assert!(matches!(n.normalize_function(&reference, 0).body, FunctionBody::Reference(_)));
        assert_eq!(n.normalize_function(&absent, 0).body, FunctionBody::Absent);
    }

    #[test]
    fn depth_ceiling_yields_unknown() {
        let mut node = build::name("x");
        for _ in 0..10 {
            node = build::paren(node);
        }
        let expr = BaseNormalizer::new(3).normalize_expr(&node.with_text("((x))"), 0);
        fn find_limit(e: &Expr) -> bool {
            match e {
                Expr::Paren(inner) => find_limit(inner),
                Expr::Unknown { kind, .. } => kind == DEPTH_LIMIT_KIND,
                _ => false,
            }
        }
        assert!(find_limit(&expr));
    }

    #[test]
    fn nested_class_past_ceiling_is_counted() {
        let innermost = build::class("C", &[], vec![], vec![]);
        let inner = build::class("B", &[], vec![], vec![innermost]);
        let outer = build::class("A", &[], vec![], vec![inner]);
        let decl = BaseNormalizer::new(1).normalize_class(&outer, 0);
        assert_eq!(decl.nested.len(), 1);
        assert_eq!(decl.depth_limited_members, 0);
        let b = &decl.nested[0];
        assert!(b.nested.is_empty());
        assert_eq!(b.depth_limited_members, 1);
    }

    #[test]
    fn block_keeps_statement_count() {
        let block = build::block(vec![
            build::property("val", "a", None, Some(build::int("1"))),
            build::raw("when_expression", "when (a) { else -> 0 }"),
            build::block(vec![build::name("b")]),
        ]);
        let stmts = BaseNormalizer::default().normalize_block(&block, 0);
        assert_eq!(stmts.len(), 3);
        assert!(matches!(stmts[1], Stmt::Unknown { ref kind, .. } if kind == "when_expression"));
    }
}
