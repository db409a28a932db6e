//! MethodBreakdown: name, parameters and reconstructed body of one method.

use crate::engine::gast::types::{FunctionBody, FunctionDecl};
use crate::engine::reconstruct::{Reconstructor, UNKNOWN_TYPE};

use super::types::{is_mutable, BodyKind, MethodModel, ParameterModel};

pub struct MethodBreakdown;

impl MethodBreakdown {
    /// `None` when the method has no name; the caller logs and skips it.
    pub fn breakdown(func: &FunctionDecl, reconstructor: &mut Reconstructor) -> Option<MethodModel> {
        let name = func.name.as_deref()?.to_string();

        let params = func
            .params
            .iter()
            .map(|p| ParameterModel {
                name: p.name.clone().unwrap_or_else(|| "_".to_string()),
                type_tag: p
                    .declared_type
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
                mutable: is_mutable(p.binding),
            })
            .collect();

        let (body_kind, statements) = match &func.body {
            FunctionBody::Block(stmts) => (BodyKind::Block, reconstructor.render_statements(stmts)),
            FunctionBody::Expression(expr) => {
                (BodyKind::Expression, vec![reconstructor.render_expression_body(expr)])
            }
            FunctionBody::Reference(expr) => {
                (BodyKind::Reference, vec![reconstructor.render_expression_body(expr)])
            }
            FunctionBody::Absent => (BodyKind::Absent, Vec::new()),
        };

        tracing::trace!(method = %name, statements = statements.len(), "method reconstructed");
        Some(MethodModel {
            name,
            params,
            return_type: func.return_type.clone(),
            body_kind,
            statements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::gast::{BaseNormalizer, GastNormalizer};
    use crate::syntax::build;

    fn breakdown(node: &crate::syntax::SyntaxNode) -> Option<MethodModel> {
        let func = BaseNormalizer::default().normalize_function(node, 0);
        MethodBreakdown::breakdown(&func, &mut Reconstructor::new())
    }

    #[test]
    fn block_body_with_params_and_return_type() {
        let node = build::function(
            "add",
            vec![build::param("a", Some("Int"), None), build::param("b", None, None)],
            Some("Int"),
            Some(build::block(vec![build::ret(Some(build::binary(
                build::name("a"),
                "+",
                build::name("b"),
            )))])),
        );
        let m = breakdown(&node).unwrap();
        assert_eq!(m.name, "add");
        assert_eq!(m.params[0].type_tag, "Int");
        assert_eq!(m.params[1].type_tag, "unknown");
        assert!(!m.params[0].mutable);
        assert_eq!(m.return_type.as_deref(), Some("Int"));
        assert_eq!(m.body_kind, BodyKind::Block);
        assert_eq!(m.statements, vec!["return a + b"]);
    }

    #[test]
    fn expression_and_reference_bodies_are_single_statements() {
        let expr = build::function("two", vec![], None, Some(build::int("2")));
        let reference = build::function("r", vec![], None, Some(build::callable_ref(None, "two")));
        let m = breakdown(&expr).unwrap();
        assert_eq!((m.body_kind, m.statements), (BodyKind::Expression, vec!["2".to_string()]));
        let m = breakdown(&reference).unwrap();
        assert_eq!((m.body_kind, m.statements), (BodyKind::Reference, vec!["::two".to_string()]));
    }

    #[test]
    fn absent_body_is_empty_not_an_error() {
        let m = breakdown(&build::function("abstractThing", vec![], None, None)).unwrap();
        assert_eq!(m.body_kind, BodyKind::Absent);
        assert!(m.statements.is_empty());
    }

    #[test]
    fn nameless_method_is_skipped() {
        let node = crate::syntax::SyntaxNode::new("function");
        assert!(breakdown(&node).is_none());
    }
}
