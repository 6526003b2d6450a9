use pretty_assertions::assert_eq;
use serde_json::json;
use treeq::{
    Candidate, Context, Documents, EvalError, ExpressionNode, Navigator, Node, NodeKind, Path,
    PathSegment,
};

fn load(doc: serde_json::Value) -> Navigator {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut documents = Documents::new();
    documents.add(Node::document(Node::from_json(doc)));
    Navigator::new(documents)
}

fn eval(navigator: &mut Navigator, expr: &ExpressionNode) -> Result<Context, EvalError> {
    let context = navigator.root_context();
    navigator.evaluate(&context, expr)
}

fn json_of(context: &Context) -> Vec<serde_json::Value> {
    context.matches.iter().map(|c| c.node.to_json()).collect()
}

fn key(name: &str) -> PathSegment {
    PathSegment::Key(name.to_string())
}

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_self_reference_returns_roots() {
    let mut nav = load(json!({"a": 1}));
    let out = eval(&mut nav, &ExpressionNode::self_reference()).unwrap();
    assert_eq!(json_of(&out), vec![json!({"a": 1})]);
    assert_eq!(out.matches[0].path, Some(Path::root()));
}

#[test]
fn test_traverse_nested_keys_and_index() {
    let mut nav = load(json!({"user": {"tags": ["x", "y"]}}));
    let expr = ExpressionNode::path(vec![key("user"), key("tags"), PathSegment::Index(1)]);
    let out = eval(&mut nav, &expr).unwrap();

    assert_eq!(json_of(&out), vec![json!("y")]);
    assert_eq!(
        out.matches[0].path,
        Some(Path::from(vec![key("user"), key("tags"), PathSegment::Index(1)]))
    );
}

#[test]
fn test_traverse_missing_yields_null_placeholder() {
    let mut nav = load(json!({"a": 1}));
    let out = eval(&mut nav, &ExpressionNode::path(["b", "c"])).unwrap();
    assert_eq!(out.matches.len(), 1);
    assert!(out.matches[0].node.is_null());
    assert_eq!(out.matches[0].path, Some(Path::from(vec![key("b"), key("c")])));
}

#[test]
fn test_traverse_index_past_end_is_null() {
    let mut nav = load(json!([1]));
    let out = eval(&mut nav, &ExpressionNode::traverse(5usize)).unwrap();
    assert!(out.matches[0].node.is_null());
}

#[test]
fn test_traverse_key_on_scalar_fails() {
    let mut nav = load(json!({"a": 1}));
    let err = eval(&mut nav, &ExpressionNode::path(["a", "b"])).unwrap_err();
    assert!(matches!(
        err,
        EvalError::TraverseMismatch {
            kind: NodeKind::Scalar,
            ..
        }
    ));
    assert_eq!(err.to_string(), "cannot traverse .b on a scalar (!!int)");
}

#[test]
fn test_traverse_index_on_mapping_fails() {
    let mut nav = load(json!({"a": 1}));
    let err = eval(&mut nav, &ExpressionNode::traverse(0usize)).unwrap_err();
    assert!(matches!(
        err,
        EvalError::TraverseMismatch {
            kind: NodeKind::Mapping,
            ..
        }
    ));
}

#[test]
fn test_traverse_computed_value_has_no_path() {
    let mut nav = load(json!(null));
    let expr = ExpressionNode::pipe(
        ExpressionNode::value(Node::from_json(json!({"k": 1}))),
        ExpressionNode::traverse("k"),
    );
    let out = eval(&mut nav, &expr).unwrap();
    assert_eq!(json_of(&out), vec![json!(1)]);
    assert_eq!(out.matches[0].path, None);
}

// ============================================================================
// Union, pipe and values
// ============================================================================

#[test]
fn test_union_keeps_order() {
    let mut nav = load(json!({"a": 1, "b": 2}));
    let expr = ExpressionNode::union(
        ExpressionNode::traverse("b"),
        ExpressionNode::union(ExpressionNode::traverse("a"), ExpressionNode::traverse("b")),
    );
    let out = eval(&mut nav, &expr).unwrap();
    assert_eq!(json_of(&out), vec![json!(2), json!(1), json!(2)]);
}

#[test]
fn test_value_yields_embedded_candidate() {
    let mut nav = load(json!({"a": 1}));
    let candidate = Candidate::literal(Node::string("lit"));
    let out = eval(&mut nav, &ExpressionNode::candidate(candidate.clone())).unwrap();
    assert_eq!(out.matches, vec![candidate]);
}

#[test]
fn test_pipe_feeds_left_into_right() {
    let mut nav = load(json!({"a": {"b": 3}}));
    let expr = ExpressionNode::pipe(ExpressionNode::traverse("a"), ExpressionNode::traverse("b"));
    let out = eval(&mut nav, &expr).unwrap();
    assert_eq!(json_of(&out), vec![json!(3)]);
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_bound_variable_is_visible_after_pipe() {
    // .a as $x | .b + $x
    let mut nav = load(json!({"a": 1, "b": 2}));
    let expr = ExpressionNode::pipe(
        ExpressionNode::bind(ExpressionNode::traverse("a"), "x"),
        ExpressionNode::add(ExpressionNode::traverse("b"), ExpressionNode::variable("x")),
    );
    let out = eval(&mut nav, &expr).unwrap();
    assert_eq!(json_of(&out), vec![json!(3)]);
    assert_eq!(out.variable("x").map(|v| v.len()), Some(1));
}

#[test]
fn test_bind_keeps_current_matches() {
    let mut nav = load(json!({"a": 1}));
    let out = eval(&mut nav, &ExpressionNode::bind(ExpressionNode::traverse("a"), "x")).unwrap();
    assert_eq!(json_of(&out), vec![json!({"a": 1})]);
}

#[test]
fn test_unbound_variable_matches_nothing() {
    let mut nav = load(json!({}));
    let out = eval(&mut nav, &ExpressionNode::variable("nope")).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_union_operands_do_not_share_bindings() {
    // (1 as $x | $x), $x
    let mut nav = load(json!(null));
    let expr = ExpressionNode::union(
        ExpressionNode::pipe(
            ExpressionNode::bind(ExpressionNode::value(Node::int(1)), "x"),
            ExpressionNode::variable("x"),
        ),
        ExpressionNode::variable("x"),
    );
    let out = eval(&mut nav, &expr).unwrap();
    assert_eq!(json_of(&out), vec![json!(1)]);
    assert!(out.variable("x").is_none());
}

#[test]
fn test_input_context_is_not_mutated() {
    let mut nav = load(json!({"a": 1}));
    let context = nav.root_context();
    let before = context.clone();
    nav.evaluate(
        &context,
        &ExpressionNode::pipe(
            ExpressionNode::bind(ExpressionNode::traverse("a"), "x"),
            ExpressionNode::add(ExpressionNode::variable("x"), ExpressionNode::value(Node::int(1))),
        ),
    )
    .unwrap();
    assert_eq!(context, before);
}
