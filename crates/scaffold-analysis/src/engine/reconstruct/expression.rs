//! ExpressionReconstructor: expressions rendered into a running statement buffer.

use crate::engine::gast::types::{Argument, Expr, Lambda, LiteralForm};

use super::primitives::PrimitiveResolver;
use super::{fallback_text, Reconstructor};

impl Reconstructor {
    /// Append the text of `expr` to `buf`.
    pub fn render_expr(&mut self, expr: &Expr, buf: &mut String) {
        match expr {
            Expr::Literal(lit) => {
                if lit.form == LiteralForm::Unknown {
                    self.note_fallback("literal");
                }
                buf.push_str(&PrimitiveResolver::resolve(lit).1);
            }

            Expr::Binary { left, op, right } => {
                self.render_expr(left, buf);
                if op.is_spaced() {
                    buf.push(' ');
                    buf.push_str(op.as_str());
                    buf.push(' ');
                } else {
                    buf.push_str(op.as_str());
                }
                self.render_expr(right, buf);
            }

            Expr::Unary {
                op,
                operand,
                postfix,
            } => {
                if *postfix {
                    self.render_expr(operand, buf);
                    buf.push_str(op);
                } else {
                    buf.push_str(op);
                    self.render_expr(operand, buf);
                }
            }

            Expr::Call {
                callee,
                args,
                lambda,
            } => {
                self.render_expr(callee, buf);
                // `vbox { ... }` keeps the trailing-lambda form without empty parens.
                if !args.is_empty() || lambda.is_none() {
                    self.render_args(args, buf);
                }
                if let Some(lambda) = lambda {
                    buf.push(' ');
                    self.render_lambda(lambda, buf);
                }
            }

            Expr::Reference { segments } => buf.push_str(&segments.join(".")),

            Expr::Lambda(lambda) => self.render_lambda(lambda, buf),

            Expr::Collection { elements } => {
                buf.push('[');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.render_expr(element, buf);
                }
                buf.push(']');
            }

            Expr::CallableRef { receiver, name } => {
                if let Some(receiver) = receiver {
                    buf.push_str(receiver);
                }
                buf.push_str("::");
                buf.push_str(name);
            }

            Expr::Return { value } => {
                buf.push_str("return");
                if let Some(value) = value {
                    buf.push(' ');
                    self.render_expr(value, buf);
                }
            }

            Expr::Paren(inner) => {
                buf.push('(');
                self.render_expr(inner, buf);
                buf.push(')');
            }

            Expr::Unknown { kind, raw } => {
                self.note_fallback(kind);
                buf.push_str(fallback_text(kind, raw));
            }
        }
    }

    /// Render `expr` into a fresh string.
    pub fn expr_text(&mut self, expr: &Expr) -> String {
        let mut buf = String::new();
        self.render_expr(expr, &mut buf);
        buf
    }

    /// `(a, b, name = c)`
    fn render_args(&mut self, args: &[Argument], buf: &mut String) {
        buf.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            if let Some(name) = &arg.name {
                buf.push_str(name);
                buf.push_str(" = ");
            }
            self.render_expr(&arg.value, buf);
        }
        buf.push(')');
    }

    /// `{ a, b -> stmt; stmt }`, `{ stmt }`, or `{}`.
    pub fn render_lambda(&mut self, lambda: &Lambda, buf: &mut String) {
        let statements = self.render_nested(&lambda.body);
        if lambda.params.is_empty() && statements.is_empty() {
            buf.push_str("{}");
            return;
        }
        buf.push_str("{ ");
        if !lambda.params.is_empty() {
            buf.push_str(&lambda.params.join(", "));
            buf.push_str(" -> ");
        }
        buf.push_str(&statements.join("; "));
        if !statements.is_empty() {
            buf.push(' ');
        }
        buf.push('}');
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::gast::{BaseNormalizer, GastNormalizer};
    use crate::engine::reconstruct::Reconstructor;
    use crate::syntax::{build, SyntaxNode};

    fn render(node: &SyntaxNode) -> String {
        let expr = BaseNormalizer::default().normalize_expr(node, 0);
        Reconstructor::new().expr_text(&expr)
    }

    #[test]
    fn binary_of_references() {
        let node = build::binary(build::name("a"), "+", build::name("b"));
        assert_eq!(render(&node), "a + b");
    }

    #[test]
    fn named_and_positional_arguments() {
        let node = build::call(
            build::name("find"),
            vec![
                build::arg(build::callable_ref(Some("Editor"), "class")),
                build::named_arg("scope", build::name("catScheduleScope")),
            ],
            None,
        );
        assert_eq!(render(&node), "find(Editor::class, scope = catScheduleScope)");
    }

    #[test]
    fn chained_call_on_call_result() {
        let find = build::call(build::name("find"), vec![build::arg(build::name("x"))], None);
        let chained = build::call(
            build::binary(find, ".", build::name("openModal")),
            vec![],
            None,
        );
        assert_eq!(render(&chained), "find(x).openModal()");
    }

    #[test]
    fn trailing_lambda_with_params() {
        let node = build::call(
            build::member(&["items", "forEach"]),
            vec![],
            Some(build::lambda(
                &["item"],
                vec![build::call(build::name("println"), vec![build::arg(build::name("item"))], None)],
            )),
        );
        assert_eq!(render(&node), "items.forEach { item -> println(item) }");
    }

    #[test]
    fn empty_builder_lambda() {
        assert_eq!(render(&build::builder("vbox", vec![])), "vbox {}");
    }

    #[test]
    fn collection_unary_and_paren() {
        let node = build::collection(vec![
            build::int("1"),
            build::unary("-", build::int("2"), false),
            build::paren(build::binary(build::name("a"), "ELVIS", build::string("b"))),
            build::unary("!!", build::name("c"), true),
        ]);
        assert_eq!(render(&node), "[1, -2, (a ?: \"b\"), c!!]");
    }

    #[test]
    fn unknown_shape_falls_back_to_raw_text() {
        let mut r = Reconstructor::new();
        let expr = BaseNormalizer::default()
            .normalize_expr(&build::raw("if_expression", "if (a) b else c"), 0);
        assert_eq!(r.expr_text(&expr), "if (a) b else c");
        assert_eq!(r.stats().raw_fallbacks, 1);
    }
}
