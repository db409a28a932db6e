//! DeclarationReconstructor: `val`/`var` declarations.

use crate::engine::gast::types::Declaration;

use super::Reconstructor;

impl Reconstructor {
    /// Append `val x: T = init` (or `val (a, b) = init`) to `buf`.
    pub fn render_declaration(&mut self, decl: &Declaration, buf: &mut String) {
        buf.push_str(decl.binding.keyword());
        buf.push(' ');

        if decl.destructuring {
            // Best-effort comma list; component types are not tracked.
            buf.push('(');
            buf.push_str(&decl.names.join(", "));
            buf.push(')');
        } else {
            match decl.names.first() {
                Some(name) => buf.push_str(name),
                None => buf.push('_'),
            }
            if let Some(ty) = &decl.declared_type {
                buf.push_str(": ");
                buf.push_str(ty);
            }
        }

        if let Some(init) = &decl.initializer {
            buf.push_str(" = ");
            self.render_expr(init, buf);
        }
    }

    pub fn declaration_text(&mut self, decl: &Declaration) -> String {
        let mut buf = String::new();
        self.render_declaration(decl, &mut buf);
        buf
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::gast::types::{Binding, Declaration, Expr};
    use crate::engine::gast::{BaseNormalizer, GastNormalizer};
    use crate::engine::reconstruct::Reconstructor;
    use crate::syntax::build;

    #[test]
    fn typed_immutable_property() {
        let node = build::property("val", "x", Some("String"), Some(build::string("hi")));
        let decl = BaseNormalizer::default().normalize_declaration(&node, 0);
        assert_eq!(Reconstructor::new().declaration_text(&decl), "val x: String = \"hi\"");
    }

    #[test]
    fn mutable_local_with_constructor_call() {
        let node = build::property(
            "var",
            "scope",
            None,
            Some(build::call(build::name("CatScheduleScope"), vec![], None)),
        );
        let decl = BaseNormalizer::default().normalize_declaration(&node, 0);
        assert_eq!(
            Reconstructor::new().declaration_text(&decl),
            "var scope = CatScheduleScope()"
        );
    }

    #[test]
    fn destructuring_renders_comma_list() {
        let node = build::destructure("val", &["first", "second"], Some(build::name("pair")));
        let decl = BaseNormalizer::default().normalize_declaration(&node, 0);
        assert!(decl.destructuring);
        assert_eq!(Reconstructor::new().declaration_text(&decl), "val (first, second) = pair");
    }

    #[test]
    fn declaration_without_initializer() {
        let decl = Declaration {
            binding: Binding::Var,
            names: vec!["count".into()],
            destructuring: false,
            declared_type: Some("Int".into()),
            initializer: None,
        };
        assert_eq!(Reconstructor::new().declaration_text(&decl), "var count: Int");
        let anonymous = Declaration {
            names: vec![],
            initializer: Some(Expr::reference("x")),
            ..decl
        };
        assert_eq!(Reconstructor::new().declaration_text(&anonymous), "var _: Int = x");
    }
}
