//! StatementSequencer: ordered statement blocks into ordered statement text.

use crate::engine::gast::types::{Expr, Stmt};

use super::{fallback_text, Reconstructor};

impl Reconstructor {
    /// Render each statement of a method body in source order. The output
    /// always has exactly one entry per input statement; unrecognized
    /// statements use raw text. Only these top-level statements are counted.
    pub fn render_statements(&mut self, stmts: &[Stmt]) -> Vec<String> {
        self.stats.statements += stmts.len();
        self.render_nested(stmts)
    }

    /// Render statements nested in a lambda or block, uncounted.
    pub(super) fn render_nested(&mut self, stmts: &[Stmt]) -> Vec<String> {
        stmts
            .iter()
            .map(|stmt| {
                let mut buf = String::new();
                self.render_stmt(stmt, &mut buf);
                buf
            })
            .collect()
    }

    /// An expression body (`fun f() = expr`) as one counted statement.
    pub fn render_expression_body(&mut self, expr: &Expr) -> String {
        self.stats.statements += 1;
        self.expr_text(expr)
    }

    pub fn render_stmt(&mut self, stmt: &Stmt, buf: &mut String) {
        match stmt {
            Stmt::Declaration(decl) => self.render_declaration(decl, buf),
            Stmt::Expression(expr) => self.render_expr(expr, buf),
            Stmt::Block(inner) => {
                let rendered = self.render_nested(inner);
                if rendered.is_empty() {
                    buf.push_str("{}");
                } else {
                    buf.push_str("{ ");
                    buf.push_str(&rendered.join("; "));
                    buf.push_str(" }");
                }
            }
            Stmt::Unknown { kind, raw } => {
                self.note_fallback(kind);
                buf.push_str(fallback_text(kind, raw));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::gast::{BaseNormalizer, GastNormalizer};
    use crate::engine::reconstruct::Reconstructor;
    use crate::syntax::build;

    #[test]
    fn method_body_statements_in_order() {
        // val catScheduleScope = CatScheduleScope()
        // catScheduleScope.model.item = catSchedule
        // find(Editor::class, scope = catScheduleScope).openModal()
        let block = build::block(vec![
            build::property(
                "val",
                "catScheduleScope",
                None,
                Some(build::call(build::name("CatScheduleScope"), vec![], None)),
            ),
            build::binary(
                build::member(&["catScheduleScope", "model", "item"]),
                "ASSN",
                build::name("catSchedule"),
            ),
            build::call(
                build::binary(
                    build::call(
                        build::name("find"),
                        vec![
                            build::arg(build::callable_ref(Some("Editor"), "class")),
                            build::named_arg("scope", build::name("catScheduleScope")),
                        ],
                        None,
                    ),
                    "DOT",
                    build::name("openModal"),
                ),
                vec![],
                None,
            ),
        ]);
        let stmts = BaseNormalizer::default().normalize_block(&block, 0);
        let rendered = Reconstructor::new().render_statements(&stmts);
        assert_eq!(
            rendered,
            vec![
                "val catScheduleScope = CatScheduleScope()",
                "catScheduleScope.model.item = catSchedule",
                "find(Editor::class, scope = catScheduleScope).openModal()",
            ]
        );
    }

    #[test]
    fn unparseable_statement_still_counts() {
        let block = build::block(vec![
            build::raw("try_expression", "try {\n  risky()\n} catch (e: Exception) {}"),
            build::ret(Some(build::name("x"))),
        ]);
        let stmts = BaseNormalizer::default().normalize_block(&block, 0);
        let mut r = Reconstructor::new();
        let rendered = r.render_statements(&stmts);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0], "try { risky() } catch (e: Exception) {}");
        assert_eq!(rendered[1], "return x");
        assert_eq!(r.stats().raw_fallbacks, 1);
    }

    #[test]
    fn nested_block_is_one_statement() {
        let block = build::block(vec![build::block(vec![build::name("a"), build::name("b")])]);
        let stmts = BaseNormalizer::default().normalize_block(&block, 0);
        assert_eq!(Reconstructor::new().render_statements(&stmts), vec!["{ a; b }"]);
    }

    #[test]
    fn only_top_level_statements_are_counted() {
        let block = build::block(vec![
            build::call(
                build::name("vbox"),
                vec![],
                Some(build::lambda(&[], vec![build::name("a"), build::name("b"), build::name("c")])),
            ),
            build::block(vec![build::name("x"), build::name("y")]),
        ]);
        let stmts = BaseNormalizer::default().normalize_block(&block, 0);
        let mut r = Reconstructor::new();
        let rendered = r.render_statements(&stmts);
        assert_eq!(rendered, vec!["vbox { a; b; c }", "{ x; y }"]);
        assert_eq!(r.stats().statements, 2);
    }
}
