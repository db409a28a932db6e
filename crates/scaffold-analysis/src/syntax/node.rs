//! The generic, loosely-shaped tree node.

use serde::{Deserialize, Serialize};

/// One node of the generic syntax tree.
///
/// `text` holds the node's raw source text; it is the fallback rendering for
/// any shape the engine does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: String,
    /// Field name this node occupies in its parent, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// A childless node carrying only text.
    pub fn leaf(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Tag this node with the field name it occupies in its parent.
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_field(self, field: &str, child: SyntaxNode) -> Self {
        self.with_child(child.in_field(field))
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// First child occupying `field`.
    pub fn child_by_field(&self, field: &str) -> Option<&SyntaxNode> {
        self.children
            .iter()
            .find(|c| c.field.as_deref() == Some(field))
    }

    /// Text of the child occupying `field`, trimmed; `None` when absent or blank.
    pub fn field_text(&self, field: &str) -> Option<&str> {
        self.child_by_field(field)
            .map(|c| c.text.trim())
            .filter(|t| !t.is_empty())
    }

    pub fn children_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SyntaxNode> + 'a {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Children that do not occupy a named field, in order.
    pub fn positional_children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(|c| c.field.is_none())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::node_count).sum::<usize>()
    }

    /// Raw text with runs of whitespace collapsed to single spaces.
    pub fn raw_text(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_finds_first_match() {
        let node = SyntaxNode::new("binary")
            .with_field("left", SyntaxNode::leaf("name", "a"))
            .with_field("op", SyntaxNode::leaf("op", "+"))
            .with_field("right", SyntaxNode::leaf("name", "b"));
        assert_eq!(node.field_text("left"), Some("a"));
        assert_eq!(node.field_text("op"), Some("+"));
        assert!(node.child_by_field("lambda").is_none());
        assert_eq!(node.positional_children().count(), 0);
    }

    #[test]
    fn deserializes_from_sparse_json() {
        let json = r#"{"kind":"block","children":[{"kind":"name","text":"x"}]}"#;
        let node: SyntaxNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, "block");
        assert_eq!(node.children[0].text, "x");
        assert!(node.children[0].field.is_none());
        assert_eq!(node.node_count(), 2);
    }

    #[test]
    fn raw_text_collapses_whitespace() {
        let node = SyntaxNode::leaf("if_expression", "if (a)\n    b()\nelse  c()");
        assert_eq!(node.raw_text(), "if (a) b() else c()");
    }
}
