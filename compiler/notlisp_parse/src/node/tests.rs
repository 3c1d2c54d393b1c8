use pretty_assertions::assert_eq;

use super::*;

#[test]
fn tags_follow_grammar_paths() {
    let span = Span::default();
    assert_eq!(ParseNode::branch(NodeKind::Program, span).tag(), ">");
    assert_eq!(ParseNode::leaf(NodeKind::Number, "1", span).tag(), "expr|number|regex");
    assert_eq!(ParseNode::leaf(NodeKind::Symbol, "x", span).tag(), "expr|symbol|regex");
    assert_eq!(ParseNode::branch(NodeKind::SExpr, span).tag(), "expr|sexpr|>");
    assert_eq!(ParseNode::branch(NodeKind::QExpr, span).tag(), "expr|qexpr|>");
    assert_eq!(ParseNode::leaf(NodeKind::Delimiter, "(", span).tag(), "char");
    assert_eq!(ParseNode::branch(NodeKind::Boundary, span).tag(), "regex");
}

#[test]
fn structural_nodes() {
    let span = Span::default();
    assert!(ParseNode::leaf(NodeKind::Delimiter, "{", span).is_structural());
    assert!(ParseNode::branch(NodeKind::Boundary, span).is_structural());
    assert!(!ParseNode::leaf(NodeKind::Symbol, "x", span).is_structural());
    assert!(!ParseNode::branch(NodeKind::QExpr, span).is_structural());
}

#[test]
fn value_children_skip_punctuation() {
    let mut group = ParseNode::branch(NodeKind::QExpr, Span::new(0, 3));
    group.children = vec![
        ParseNode::leaf(NodeKind::Delimiter, "{", Span::new(0, 1)),
        ParseNode::leaf(NodeKind::Number, "1", Span::new(1, 2)),
        ParseNode::leaf(NodeKind::Delimiter, "}", Span::new(2, 3)),
    ];
    let kinds: Vec<NodeKind> = group.value_children().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![NodeKind::Number]);
}

#[test]
fn dump_reports_line_and_column() {
    let source = "\n  x";
    let mut root = ParseNode::branch(NodeKind::Program, Span::new(0, 4));
    root.children
        .push(ParseNode::leaf(NodeKind::Symbol, "x", Span::new(3, 4)));
    assert_eq!(root.dump(source), ">\n  expr|symbol|regex:2:3 'x'\n");
}

fn nested(depth: usize) -> ParseNode {
    (0..depth).fold(
        ParseNode::leaf(NodeKind::Number, "1", Span::default()),
        |inner, _| {
            let mut group = ParseNode::branch(NodeKind::QExpr, Span::default());
            group.children.push(inner);
            group
        },
    )
}

#[test]
fn deep_tree_drops_without_overflow() {
    drop(nested(100_000));
}

#[test]
fn deep_tree_clones_and_compares() {
    let tree = nested(100_000);
    let copy = tree.clone();
    assert!(copy == tree);
    assert!(copy != nested(99_999));
}
