//! Generic parse tree.

use std::fmt::Write as _;

use notlisp_stack::ensure_sufficient_stack;

use crate::span::Span;

/// What a parse-tree node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a parsed input.
    Program,
    Number,
    Symbol,
    /// `( ... )` group.
    SExpr,
    /// `{ ... }` group.
    QExpr,
    /// A bracket character inside a group.
    Delimiter,
    /// Start-of-input or end-of-input marker under the root.
    Boundary,
}

/// A node of the parse tree.
///
/// Leaves (`Number`, `Symbol`, `Delimiter`) carry their source text in
/// `contents`; branches and boundaries have empty contents.
///
/// Trees of any depth can be cloned, compared and dropped.
#[derive(Debug, Eq)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub contents: String,
    pub span: Span,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn leaf(kind: NodeKind, contents: impl Into<String>, span: Span) -> Self {
        ParseNode {
            kind,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn branch(kind: NodeKind, span: Span) -> Self {
        ParseNode::leaf(kind, String::new(), span)
    }

    /// Grammar-path tag shown in parse-tree dumps.
    pub fn tag(&self) -> &'static str {
        match self.kind {
            NodeKind::Program => ">",
            NodeKind::Number => "expr|number|regex",
            NodeKind::Symbol => "expr|symbol|regex",
            NodeKind::SExpr => "expr|sexpr|>",
            NodeKind::QExpr => "expr|qexpr|>",
            NodeKind::Delimiter => "char",
            NodeKind::Boundary => "regex",
        }
    }

    /// Punctuation and boundary nodes carry no value.
    #[inline]
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, NodeKind::Delimiter | NodeKind::Boundary)
    }

    /// Children that carry values, in source order.
    pub fn value_children(&self) -> impl Iterator<Item = &ParseNode> {
        self.children.iter().filter(|child| !child.is_structural())
    }

    /// Indented dump of the tree, one node per line.
    ///
    /// ```text
    /// >
    ///   regex
    ///   expr|sexpr|>
    ///     char:1:1 '('
    ///     expr|symbol|regex:1:2 '+'
    ///     expr|number|regex:1:4 '1'
    ///     char:1:5 ')'
    ///   regex
    /// ```
    pub fn dump(&self, source: &str) -> String {
        let mut out = String::new();
        self.dump_into(source, 0, &mut out);
        out
    }

    fn dump_into(&self, source: &str, depth: usize, out: &mut String) {
        ensure_sufficient_stack(|| {
            for _ in 0..depth {
                out.push_str("  ");
            }
            if self.contents.is_empty() {
                out.push_str(self.tag());
            } else {
                let (line, col) = self.span.line_col(source);
                let _ = write!(out, "{}:{line}:{col} '{}'", self.tag(), self.contents);
            }
            out.push('\n');
            for child in &self.children {
                child.dump_into(source, depth + 1, out);
            }
        });
    }
}

impl Clone for ParseNode {
    fn clone(&self) -> Self {
        ParseNode {
            kind: self.kind,
            contents: self.contents.clone(),
            span: self.span,
            children: ensure_sufficient_stack(|| self.children.clone()),
        }
    }
}

impl PartialEq for ParseNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.span == other.span
            && self.contents == other.contents
            && ensure_sufficient_stack(|| self.children == other.children)
    }
}

impl Drop for ParseNode {
    fn drop(&mut self) {
        if self.children.iter().all(|child| child.children.is_empty()) {
            return;
        }
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests;
