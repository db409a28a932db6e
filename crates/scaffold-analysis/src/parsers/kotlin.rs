//! Kotlin front end: tree-sitter-kotlin CST → generic syntax tree.
//!
//! Tolerates both naming schemes seen across Kotlin grammars
//! (`simple_identifier` / `identifier`, optional `statements`,
//! `class_parameters`, `delegation_specifiers` and `call_suffix` wrappers).
//! Anything it does not map keeps its tree-sitter kind and source text, which
//! the engine then renders as raw text.

use scaffold_core::config::analysis_config::DEFAULT_MAX_DEPTH;
use scaffold_core::errors::AnalysisError;
use tree_sitter::{Node, Parser};

use crate::syntax::kinds::{self, field};
use crate::syntax::{build, SyntaxNode};

const IDENT_KINDS: &[&str] = &["simple_identifier", "identifier", "type_identifier"];

const TYPE_KINDS: &[&str] = &[
    "user_type",
    "nullable_type",
    "non_nullable_type",
    "function_type",
    "parenthesized_type",
    "type",
    "dynamic",
];

const BINARY_KINDS: &[&str] = &[
    "additive_expression",
    "multiplicative_expression",
    "comparison_expression",
    "equality_expression",
    "conjunction_expression",
    "disjunction_expression",
    "elvis_expression",
    "range_expression",
    "range_until_expression",
    "infix_expression",
    "check_expression",
    "as_expression",
    "spread_expression",
];

#[derive(Debug, Clone)]
pub struct KotlinFrontend {
    max_depth: usize,
}

impl Default for KotlinFrontend {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl KotlinFrontend {
    /// `max_depth` bounds expression nesting; deeper subtrees are kept as raw text.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse `source` and lower it to a `file` node. `path` is only used in
    /// error messages and logs.
    pub fn parse(&self, source: &str, path: &str) -> Result<SyntaxNode, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_kotlin_sg::LANGUAGE.into())
            .map_err(|e| AnalysisError::Frontend {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Frontend {
                path: path.to_string(),
                message: "tree-sitter returned no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!(path, "source has syntax errors; affected nodes stay raw");
        }
        let lowering = Lowering {
            src: source,
            max_depth: self.max_depth,
        };
        Ok(lowering.file(root))
    }
}

struct Lowering<'s> {
    src: &'s str,
    max_depth: usize,
}

impl<'s> Lowering<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.src.as_bytes()).unwrap_or("")
    }

    fn file(&self, root: Node<'_>) -> SyntaxNode {
        let mut file = SyntaxNode::new(kinds::FILE);
        for child in named(root) {
            match child.kind() {
                "package_header" => {
                    let path = strip_keyword(self.text(child), "package");
                    file = file.with_child(SyntaxNode::leaf(kinds::PACKAGE, path));
                }
                "import_list" => {
                    for header in named(child).into_iter().filter(|h| h.kind() == "import_header") {
                        file = file.with_child(self.import(header));
                    }
                }
                "import_header" | "import" => file = file.with_child(self.import(child)),
                "class_declaration" | "object_declaration" => file = file.with_child(self.class(child, 0)),
                "function_declaration" => file = file.with_child(self.function(child, 0)),
                "property_declaration" => file = file.with_child(self.property(child, 0)),
                other => tracing::trace!(kind = other, "skipping top-level kotlin node"),
            }
        }
        file
    }

    fn import(&self, node: Node<'_>) -> SyntaxNode {
        SyntaxNode::leaf(kinds::IMPORT, strip_keyword(self.text(node), "import"))
    }

    fn class(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let mut class = SyntaxNode::new(kinds::CLASS);
        if let Some(name) = find(node, IDENT_KINDS) {
            class = class.with_field(field::NAME, build::name(self.text(name)));
        }

        let supertypes = delegation_specifiers(node)
            .into_iter()
            .map(|spec| build::supertype(self.supertype_text(spec)));
        class = class.with_field(
            field::SUPERTYPES,
            SyntaxNode::new("supertypes").with_children(supertypes),
        );

        if let Some(ctor) = find(node, &["primary_constructor"]) {
            let params = flatten(ctor, "class_parameters")
                .into_iter()
                .filter(|p| p.kind() == "class_parameter")
                .map(|p| self.param(p));
            class = class.with_field(
                field::CONSTRUCTOR,
                SyntaxNode::new("constructor").with_children(params),
            );
        }

        if let Some(body) = find(node, &["class_body", "enum_class_body"]) {
            let mut members = Vec::new();
            for member in flatten(body, "class_member_declarations") {
                match member.kind() {
                    "property_declaration" => members.push(self.property(member, depth + 1)),
                    "function_declaration" => members.push(self.function(member, depth + 1)),
                    "class_declaration" | "object_declaration" => {
                        members.push(self.class(member, depth + 1))
                    }
                    other => tracing::trace!(kind = other, "skipping kotlin class member"),
                }
            }
            class = class.with_field(field::BODY, SyntaxNode::new("body").with_children(members));
        }
        class
    }

    fn supertype_text(&self, spec: Node<'_>) -> &'s str {
        let target = find(spec, &["constructor_invocation"]).unwrap_or(spec);
        match find(target, TYPE_KINDS) {
            Some(ty) => self.text(ty),
            None => self.text(target),
        }
    }

    /// Constructor or function parameter.
    fn param(&self, node: Node<'_>) -> SyntaxNode {
        let node = find(node, &["parameter"]).unwrap_or(node);
        let mut param = SyntaxNode::new(kinds::PARAM).with_text(self.text(node));
        if let Some(name) = find(node, IDENT_KINDS) {
            param = param.with_field(field::NAME, build::name(self.text(name)));
        }
        if let Some(ty) = find(node, TYPE_KINDS) {
            param = param.with_field(field::TYPE, build::type_ref(self.text(ty)));
        }
        if let Some(binding) = self.binding(node) {
            param = param.with_field(field::BINDING, SyntaxNode::leaf("binding", binding));
        }
        param
    }

    /// `val` / `var`, whether a `binding_pattern_kind` node or a bare keyword.
    fn binding(&self, node: Node<'_>) -> Option<&'s str> {
        if let Some(kind) = find(node, &["binding_pattern_kind"]) {
            return Some(self.text(kind).trim());
        }
        children(node)
            .into_iter()
            .filter(|c| !c.is_named())
            .map(|c| self.text(c))
            .find(|t| *t == "val" || *t == "var")
    }

    fn property(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let mut prop = SyntaxNode::new(kinds::PROPERTY)
            .with_text(self.text(node))
            .with_field(
                field::BINDING,
                SyntaxNode::leaf("binding", self.binding(node).unwrap_or("val")),
            );

        if let Some(multi) = find(node, &["multi_variable_declaration"]) {
            let names = named(multi)
                .into_iter()
                .map(|v| find(v, IDENT_KINDS).unwrap_or(v))
                .map(|n| build::name(self.text(n)));
            prop = prop.with_field(field::DESTRUCTURE, SyntaxNode::new("destructure").with_children(names));
        } else {
            let decl = find(node, &["variable_declaration"]).unwrap_or(node);
            if let Some(name) = find(decl, IDENT_KINDS) {
                prop = prop.with_field(field::NAME, build::name(self.text(name)));
            }
            if let Some(ty) = find(decl, TYPE_KINDS) {
                prop = prop.with_field(field::TYPE, build::type_ref(self.text(ty)));
            }
        }

        if let Some(value) = named_after_token(node, self.src, "=") {
            prop = prop.with_field(field::VALUE, self.expr(value, depth + 1));
        }
        prop
    }

    fn function(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let mut func = SyntaxNode::new(kinds::FUNCTION).with_text(self.text(node));
        if let Some(name) = find(node, IDENT_KINDS) {
            func = func.with_field(field::NAME, build::name(self.text(name)));
        }

        let params = find(node, &["function_value_parameters"])
            .map(|list| {
                named(list)
                    .into_iter()
                    .filter(|p| matches!(p.kind(), "parameter" | "function_value_parameter"))
                    .map(|p| self.param(p))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        func = func.with_field(field::PARAMS, SyntaxNode::new("params").with_children(params));

        if let Some(ret) = self.return_type(node) {
            func = func.with_field(field::TYPE, build::type_ref(ret));
        }

        let body = match find(node, &["function_body"]) {
            Some(body) => self.function_body(body, depth + 1),
            None => find(node, &["block"]).map(|block| self.block(block, depth + 1)),
        };
        if let Some(body) = body {
            func = func.with_field(field::BODY, body);
        }
        func
    }

    /// `{ ... }` bodies hold their statements directly (or under a `block`
    /// wrapper in older grammars); `= expr` bodies hold one expression.
    fn function_body(&self, body: Node<'_>, depth: usize) -> Option<SyntaxNode> {
        if let Some(block) = find(body, &["block"]) {
            return Some(self.block(block, depth));
        }
        if has_token(body, self.src, "{") {
            return Some(self.block(body, depth));
        }
        named_after_token(body, self.src, "=")
            .or_else(|| named(body).into_iter().next())
            .map(|e| self.expr(e, depth))
    }

    /// The type node after `function_value_parameters` and `:`.
    fn return_type(&self, node: Node<'_>) -> Option<&'s str> {
        let mut after_params = false;
        let mut after_colon = false;
        for child in children(node) {
            if child.kind() == "function_value_parameters" {
                after_params = true;
            } else if after_params && !child.is_named() && self.text(child) == ":" {
                after_colon = true;
            } else if after_colon && TYPE_KINDS.contains(&child.kind()) {
                return Some(self.text(child));
            }
        }
        None
    }

    fn block(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let stmts = flatten(node, "statements")
            .into_iter()
            .map(|s| self.stmt(s, depth + 1))
            .collect::<Vec<_>>();
        build::block(stmts).with_text(self.text(node))
    }

    fn stmt(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        match node.kind() {
            "property_declaration" => self.property(node, depth),
            "assignment" => self.binary(node, depth),
            _ => self.expr(node, depth),
        }
    }

    fn expr(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let text = self.text(node);
        if depth > self.max_depth {
            return build::raw(node.kind(), text);
        }
        let next = depth + 1;

        let lowered = match node.kind() {
            "integer_literal" | "hex_literal" | "bin_literal" | "long_literal" => build::int(text),
            "real_literal" => build::float(text),
            "boolean_literal" => SyntaxNode::leaf(kinds::BOOL, text),
            "character_literal" => build::character(text),
            "string_literal" | "line_string_literal" | "multi_line_string_literal" => build::string(text),
            "null_literal" | "null" => build::null(),
            "unsigned_literal" => build::literal(text),

            "simple_identifier" | "identifier" | "type_identifier" | "this_expression"
            | "super_expression" => build::name(text),
            k if TYPE_KINDS.contains(&k) => build::name(text),

            "parenthesized_expression" => match named(node).into_iter().next() {
                Some(inner) => build::paren(self.expr(inner, next)),
                None => build::raw(node.kind(), text),
            },

            "navigation_expression" => self.navigation(node, next),
            "directly_assignable_expression" | "assignable_expression" => {
                if find(node, &["navigation_suffix"]).is_some() {
                    self.navigation(node, next)
                } else {
                    match named(node).into_iter().next() {
                        Some(inner) => self.expr(inner, next),
                        None => build::raw(node.kind(), text),
                    }
                }
            }
            "call_expression" => self.call(node, next),
            "lambda_literal" | "annotated_lambda" => self.lambda(node, next),
            "callable_reference" => callable_ref(text),

            "collection_literal" => {
                build::collection(named(node).into_iter().map(|e| self.expr(e, next)).collect())
            }

            "prefix_expression" => match named(node).into_iter().last() {
                Some(operand) => {
                    let op = self.src[node.start_byte()..operand.start_byte()].trim();
                    if op.is_empty() {
                        build::raw(node.kind(), text)
                    } else {
                        build::unary(op, self.expr(operand, next), false)
                    }
                }
                None => build::raw(node.kind(), text),
            },

            "postfix_expression" => match named(node).into_iter().next() {
                Some(operand) => {
                    let op = self.src[operand.end_byte()..node.end_byte()].trim();
                    if op.is_empty() {
                        build::raw(node.kind(), text)
                    } else {
                        build::unary(op, self.expr(operand, next), true)
                    }
                }
                None => build::raw(node.kind(), text),
            },

            "jump_expression" if text.trim_start().starts_with("return") => {
                build::ret(named(node).into_iter().next().map(|v| self.expr(v, next)))
            }

            k if BINARY_KINDS.contains(&k) => self.binary(node, depth),

            other => build::raw(other, text),
        };

        if lowered.text.is_empty() {
            lowered.with_text(text)
        } else {
            lowered
        }
    }

    /// Left and right are the outermost named children; the operator is the
    /// source text between them.
    fn binary(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let text = self.text(node);
        let parts = named(node);
        let (Some(left), Some(right)) = (parts.first().copied(), parts.last().copied()) else {
            return build::raw(node.kind(), text);
        };
        if parts.len() < 2 {
            return build::raw(node.kind(), text);
        }
        let op = self.src[left.end_byte()..right.start_byte()].trim();
        if op.is_empty() {
            return build::raw(node.kind(), text);
        }
        build::binary(self.expr(left, depth + 1), op, self.expr(right, depth + 1)).with_text(text)
    }

    fn navigation(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let text = self.text(node);
        let Some(receiver) = named(node).into_iter().next() else {
            return build::raw(node.kind(), text);
        };
        // Older grammars wrap `.member` in a navigation_suffix.
        let suffix = find(node, &["navigation_suffix"]);
        let holder = suffix.unwrap_or(node);
        let op = children(holder)
            .into_iter()
            .filter(|c| !c.is_named())
            .map(|c| self.text(c))
            .find(|t| matches!(*t, "." | "?." | "::"));
        let Some(op) = op else {
            return build::raw(node.kind(), text);
        };
        let member = match suffix {
            Some(s) => named(s).into_iter().next(),
            None => named(node).into_iter().nth(1),
        };
        let member_text = match member {
            Some(m) => self.text(m),
            None => {
                let tail = self.src[receiver.end_byte()..node.end_byte()].trim();
                tail.strip_prefix(op).unwrap_or(tail).trim()
            }
        };

        if op == "::" {
            return build::callable_ref(Some(self.text(receiver)), member_text).with_text(text);
        }
        let right = match member {
            Some(m) if !IDENT_KINDS.contains(&m.kind()) => self.expr(m, depth + 1),
            _ => build::name(member_text),
        };
        build::binary(self.expr(receiver, depth + 1), op, right).with_text(text)
    }

    fn call(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let text = self.text(node);
        let Some(callee) = named(node).into_iter().next() else {
            return build::raw(node.kind(), text);
        };
        let holder = find(node, &["call_suffix"]).unwrap_or(node);

        let args = find(holder, &["value_arguments"])
            .map(|list| {
                named(list)
                    .into_iter()
                    .filter(|a| a.kind() == "value_argument")
                    .filter_map(|a| self.argument(a, depth + 1))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        let lambda = find(holder, &["annotated_lambda", "lambda_literal"]).map(|l| self.lambda(l, depth + 1));

        build::call(self.expr(callee, depth + 1), args, lambda).with_text(text)
    }

    fn argument(&self, node: Node<'_>, depth: usize) -> Option<SyntaxNode> {
        let parts = named(node);
        let value = *parts.last()?;
        let has_name = children(node)
            .into_iter()
            .any(|c| !c.is_named() && self.text(c) == "=");
        let lowered = self.expr(value, depth);
        match parts.first() {
            Some(name) if has_name && parts.len() >= 2 && IDENT_KINDS.contains(&name.kind()) => {
                Some(build::named_arg(self.text(*name), lowered))
            }
            _ => Some(build::arg(lowered)),
        }
    }

    fn lambda(&self, node: Node<'_>, depth: usize) -> SyntaxNode {
        let node = find(node, &["lambda_literal"]).unwrap_or(node);
        let params: Vec<&str> = find(node, &["lambda_parameters"])
            .map(|list| {
                named(list)
                    .into_iter()
                    .map(|p| find(p, IDENT_KINDS).unwrap_or(p))
                    .map(|p| self.text(p))
                    .collect()
            })
            .unwrap_or_default();
        let stmts = flatten(node, "statements")
            .into_iter()
            .filter(|s| s.kind() != "lambda_parameters")
            .map(|s| self.stmt(s, depth + 1))
            .collect();
        build::lambda(&params, stmts).with_text(self.text(node))
    }
}

// ---- Helper functions ----

/// Direct children, comments and other extras excluded.
fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let out: Vec<_> = node.children(&mut cursor).filter(|c| !c.is_extra()).collect();
    out
}

fn named(node: Node<'_>) -> Vec<Node<'_>> {
    children(node).into_iter().filter(|c| c.is_named()).collect()
}

fn find<'t>(node: Node<'t>, wanted: &[&str]) -> Option<Node<'t>> {
    named(node).into_iter().find(|c| wanted.contains(&c.kind()))
}

/// Named children, descending into an optional `wrapper` node.
fn flatten<'t>(node: Node<'t>, wrapper: &str) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    for child in named(node) {
        if child.kind() == wrapper {
            out.extend(named(child));
        } else {
            out.push(child);
        }
    }
    out
}

fn delegation_specifiers(node: Node<'_>) -> Vec<Node<'_>> {
    flatten(node, "delegation_specifiers")
        .into_iter()
        .filter(|c| c.kind() == "delegation_specifier")
        .collect()
}

fn has_token(node: Node<'_>, src: &str, token: &str) -> bool {
    children(node)
        .into_iter()
        .any(|c| !c.is_named() && c.utf8_text(src.as_bytes()).ok() == Some(token))
}

/// First named child after an anonymous `token` child.
fn named_after_token<'t>(node: Node<'t>, src: &str, token: &str) -> Option<Node<'t>> {
    let mut seen = false;
    for child in children(node) {
        if !child.is_named() && child.utf8_text(src.as_bytes()).ok() == Some(token) {
            seen = true;
        } else if seen && child.is_named() {
            return Some(child);
        }
    }
    None
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> &'a str {
    let text = text.trim();
    text.strip_prefix(keyword).map(str::trim).unwrap_or(text)
}

/// `Editor::class`, `::handler`, `String::length`.
fn callable_ref(text: &str) -> SyntaxNode {
    match text.rsplit_once("::") {
        Some((receiver, target)) => {
            let receiver = receiver.trim();
            let receiver = (!receiver.is_empty()).then_some(receiver);
            build::callable_ref(receiver, target.trim()).with_text(text)
        }
        None => build::raw("callable_reference", text),
    }
}
