use std::rc::Rc;

use crate::{
    ast::Operation,
    candidate::Candidate,
    error::{EvalError, Result},
    node::Node,
    path::PathSegment,
};

/// Node of a parsed query.
///
/// Built once by the parser and never mutated. Children are shared so the
/// evaluator can splice existing subtrees into short-lived synthetic trees.
///
/// # Examples
///
/// ```
/// use treeq::ast::{ExpressionNode, Operation};
/// use treeq::node::Node;
///
/// // .a + 1
/// let expr = ExpressionNode::add(
///     ExpressionNode::traverse("a"),
///     ExpressionNode::value(Node::int(1)),
/// );
/// assert_eq!(expr.operation, Operation::Add);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionNode {
    pub operation: Operation,
    pub lhs: Option<Rc<ExpressionNode>>,
    pub rhs: Option<Rc<ExpressionNode>>,
}

impl ExpressionNode {
    pub fn leaf(operation: Operation) -> Self {
        ExpressionNode {
            operation,
            lhs: None,
            rhs: None,
        }
    }

    pub fn binary(
        operation: Operation,
        lhs: impl Into<Rc<ExpressionNode>>,
        rhs: impl Into<Rc<ExpressionNode>>,
    ) -> Self {
        ExpressionNode {
            operation,
            lhs: Some(lhs.into()),
            rhs: Some(rhs.into()),
        }
    }

    /// Left child, or [`EvalError::MissingOperand`].
    pub fn lhs(&self) -> Result<&ExpressionNode> {
        self.lhs.as_deref().ok_or(EvalError::MissingOperand {
            operation: self.operation.name(),
            side: "left",
        })
    }

    /// Right child, or [`EvalError::MissingOperand`].
    pub fn rhs(&self) -> Result<&ExpressionNode> {
        self.rhs.as_deref().ok_or(EvalError::MissingOperand {
            operation: self.operation.name(),
            side: "right",
        })
    }

    pub fn self_reference() -> Self {
        Self::leaf(Operation::SelfReference)
    }

    /// Constant yielding a free-standing copy of `node`.
    pub fn value(node: Node) -> Self {
        Self::leaf(Operation::Value(Candidate::literal(node)))
    }

    /// Constant yielding exactly `candidate`, path included.
    pub fn candidate(candidate: Candidate) -> Self {
        Self::leaf(Operation::Value(candidate))
    }

    pub fn traverse(segment: impl Into<PathSegment>) -> Self {
        Self::leaf(Operation::TraversePath(segment.into()))
    }

    /// `.a.b[0]` style chain of traversals joined by pipes.
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        segments
            .into_iter()
            .map(|segment| Self::traverse(segment))
            .reduce(|lhs, rhs| Self::pipe(lhs, rhs))
            .unwrap_or_else(Self::self_reference)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::leaf(Operation::GetVariable(name.into()))
    }

    pub fn pipe(lhs: impl Into<Rc<ExpressionNode>>, rhs: impl Into<Rc<ExpressionNode>>) -> Self {
        Self::binary(Operation::Pipe, lhs, rhs)
    }

    pub fn union(lhs: impl Into<Rc<ExpressionNode>>, rhs: impl Into<Rc<ExpressionNode>>) -> Self {
        Self::binary(Operation::Union, lhs, rhs)
    }

    /// `lhs as $name`; the right child is unused.
    pub fn bind(lhs: impl Into<Rc<ExpressionNode>>, name: impl Into<String>) -> Self {
        ExpressionNode {
            operation: Operation::BindVariable(name.into()),
            lhs: Some(lhs.into()),
            rhs: None,
        }
    }

    pub fn add(lhs: impl Into<Rc<ExpressionNode>>, rhs: impl Into<Rc<ExpressionNode>>) -> Self {
        Self::binary(Operation::Add, lhs, rhs)
    }

    pub fn assign(lhs: impl Into<Rc<ExpressionNode>>, rhs: impl Into<Rc<ExpressionNode>>) -> Self {
        Self::binary(Operation::Assign, lhs, rhs)
    }

    pub fn add_assign(
        lhs: impl Into<Rc<ExpressionNode>>,
        rhs: impl Into<Rc<ExpressionNode>>,
    ) -> Self {
        Self::binary(Operation::AddAssign, lhs, rhs)
    }
}
