//! Constructors for canonical node shapes.
//!
//! Used by the bundled front end and by callers assembling trees by hand.

use super::kinds::{self, field};
use super::node::SyntaxNode;

pub fn name(ident: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::NAME, ident)
}

/// Dot chain of identifiers, e.g. `model.item.name`.
pub fn member(segments: &[&str]) -> SyntaxNode {
    SyntaxNode::new(kinds::MEMBER)
        .with_text(segments.join("."))
        .with_children(segments.iter().map(|s| name(s)))
}

pub fn int(value: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::INT, value)
}

pub fn float(value: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::FLOAT, value)
}

pub fn boolean(value: bool) -> SyntaxNode {
    SyntaxNode::leaf(kinds::BOOL, if value { "true" } else { "false" })
}

/// String literal; `value` is the unquoted content.
pub fn string(value: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::STRING, value)
}

pub fn character(value: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::CHAR, value)
}

pub fn null() -> SyntaxNode {
    SyntaxNode::leaf(kinds::NULL, "null")
}

/// Literal whose form the front end could not determine.
pub fn literal(raw: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::LITERAL, raw)
}

pub fn binary(left: SyntaxNode, op: &str, right: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(kinds::BINARY)
        .with_field(field::LEFT, left)
        .with_field(field::OP, SyntaxNode::leaf("op", op))
        .with_field(field::RIGHT, right)
}

pub fn unary(op: &str, operand: SyntaxNode, postfix: bool) -> SyntaxNode {
    let node = SyntaxNode::new(kinds::UNARY)
        .with_field(field::OP, SyntaxNode::leaf("op", op))
        .with_field(field::OPERAND, operand);
    if postfix {
        node.with_field(field::POSTFIX, SyntaxNode::leaf("flag", "true"))
    } else {
        node
    }
}

pub fn arg(value: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(kinds::ARG).with_field(field::VALUE, value)
}

pub fn named_arg(arg_name: &str, value: SyntaxNode) -> SyntaxNode {
    arg(value).with_field(field::NAME, name(arg_name))
}

pub fn call(callee: SyntaxNode, args: Vec<SyntaxNode>, lambda: Option<SyntaxNode>) -> SyntaxNode {
    let node = SyntaxNode::new(kinds::CALL)
        .with_field(field::CALLEE, callee)
        .with_field(field::ARGS, SyntaxNode::new("args").with_children(args));
    match lambda {
        Some(l) => node.with_field(field::LAMBDA, l),
        None => node,
    }
}

/// Builder call with a trailing lambda and no value arguments: `callee { ... }`.
pub fn builder(callee: &str, stmts: Vec<SyntaxNode>) -> SyntaxNode {
    call(name(callee), vec![], Some(lambda(&[], stmts)))
}

pub fn block(stmts: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(kinds::BLOCK).with_children(stmts)
}

pub fn lambda(params: &[&str], stmts: Vec<SyntaxNode>) -> SyntaxNode {
    let params = SyntaxNode::new("params").with_children(
        params
            .iter()
            .map(|p| SyntaxNode::new(kinds::PARAM).with_field(field::NAME, name(p))),
    );
    SyntaxNode::new(kinds::LAMBDA)
        .with_field(field::PARAMS, params)
        .with_field(field::BODY, block(stmts))
}

pub fn collection(elements: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(kinds::COLLECTION).with_children(elements)
}

pub fn callable_ref(receiver: Option<&str>, target: &str) -> SyntaxNode {
    let node = SyntaxNode::new(kinds::CALLABLE_REF).with_field(field::NAME, name(target));
    match receiver {
        Some(r) => node.with_field(field::RECEIVER, name(r)),
        None => node,
    }
}

pub fn ret(value: Option<SyntaxNode>) -> SyntaxNode {
    let node = SyntaxNode::new(kinds::RETURN);
    match value {
        Some(v) => node.with_field(field::VALUE, v),
        None => node,
    }
}

pub fn paren(inner: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(kinds::PAREN).with_child(inner)
}

/// A node of a kind the engine does not know; renders as `text`.
pub fn raw(kind: &str, text: &str) -> SyntaxNode {
    SyntaxNode::leaf(kind, text)
}

pub fn type_ref(type_name: &str) -> SyntaxNode {
    SyntaxNode::leaf(kinds::TYPE, type_name)
}

pub fn property(
    binding: &str,
    prop_name: &str,
    declared_type: Option<&str>,
    value: Option<SyntaxNode>,
) -> SyntaxNode {
    let mut node = SyntaxNode::new(kinds::PROPERTY)
        .with_field(field::BINDING, SyntaxNode::leaf("binding", binding))
        .with_field(field::NAME, name(prop_name));
    if let Some(t) = declared_type {
        node = node.with_field(field::TYPE, type_ref(t));
    }
    if let Some(v) = value {
        node = node.with_field(field::VALUE, v);
    }
    node
}

/// Destructuring declaration, e.g. `val (a, b) = pair`.
pub fn destructure(binding: &str, names: &[&str], value: Option<SyntaxNode>) -> SyntaxNode {
    let targets = SyntaxNode::new("destructure").with_children(names.iter().map(|n| name(n)));
    let node = SyntaxNode::new(kinds::PROPERTY)
        .with_field(field::BINDING, SyntaxNode::leaf("binding", binding))
        .with_field(field::DESTRUCTURE, targets);
    match value {
        Some(v) => node.with_field(field::VALUE, v),
        None => node,
    }
}

pub fn param(param_name: &str, declared_type: Option<&str>, binding: Option<&str>) -> SyntaxNode {
    let mut node = SyntaxNode::new(kinds::PARAM).with_field(field::NAME, name(param_name));
    if let Some(t) = declared_type {
        node = node.with_field(field::TYPE, type_ref(t));
    }
    if let Some(b) = binding {
        node = node.with_field(field::BINDING, SyntaxNode::leaf("binding", b));
    }
    node
}

pub fn function(
    fn_name: &str,
    params: Vec<SyntaxNode>,
    return_type: Option<&str>,
    body: Option<SyntaxNode>,
) -> SyntaxNode {
    let mut node = SyntaxNode::new(kinds::FUNCTION)
        .with_field(field::NAME, name(fn_name))
        .with_field(field::PARAMS, SyntaxNode::new("params").with_children(params));
    if let Some(t) = return_type {
        node = node.with_field(field::TYPE, type_ref(t));
    }
    if let Some(b) = body {
        node = node.with_field(field::BODY, b);
    }
    node
}

pub fn supertype(type_name: &str) -> SyntaxNode {
    SyntaxNode::new(kinds::SUPERTYPE).with_child(type_ref(type_name))
}

pub fn class(
    class_name: &str,
    supertypes: &[&str],
    constructor: Vec<SyntaxNode>,
    members: Vec<SyntaxNode>,
) -> SyntaxNode {
    SyntaxNode::new(kinds::CLASS)
        .with_field(field::NAME, name(class_name))
        .with_field(
            field::SUPERTYPES,
            SyntaxNode::new("supertypes").with_children(supertypes.iter().map(|s| supertype(s))),
        )
        .with_field(
            field::CONSTRUCTOR,
            SyntaxNode::new("constructor").with_children(constructor),
        )
        .with_field(field::BODY, SyntaxNode::new("body").with_children(members))
}

pub fn file(package: Option<&str>, decls: Vec<SyntaxNode>) -> SyntaxNode {
    let mut node = SyntaxNode::new(kinds::FILE);
    if let Some(p) = package {
        node = node.with_child(SyntaxNode::leaf(kinds::PACKAGE, p));
    }
    node.with_children(decls)
}
