use crate::{
    context::Context,
    error::{EvalError, Result},
    evaluator::Navigator,
    node::{Node, NodeValue},
    path::PathSegment,
};

/// `.key` / `[index]` applied to every match.
///
/// Missing children come back as null placeholders that still carry the
/// child path, so that assigning to them creates the entry.
pub fn traverse(navigator: &Navigator, context: &Context, segment: &PathSegment) -> Result<Context> {
    let mut matches = Vec::with_capacity(context.len());

    for candidate in &context.matches {
        let candidate = navigator.current(candidate);
        let node = candidate.node.unwrap_document();

        let child = match (&node.value, segment) {
            _ if node.is_null() => Node::null(),
            (NodeValue::Mapping(_), PathSegment::Key(key)) => {
                node.get_key(key).cloned().unwrap_or_else(Node::null)
            }
            (NodeValue::Sequence(items), PathSegment::Index(index)) => {
                items.get(*index).cloned().unwrap_or_else(Node::null)
            }
            _ => {
                return Err(EvalError::TraverseMismatch {
                    segment: segment.clone(),
                    kind: node.kind(),
                    tag: node.tag.clone(),
                });
            }
        };

        matches.push(candidate.create_child(Some(segment.clone()), child));
    }

    Ok(context.child(matches))
}
