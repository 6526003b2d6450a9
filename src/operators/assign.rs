use std::rc::Rc;

use log::{debug, trace};

use crate::{
    ast::{ExpressionNode, Operation},
    candidate::Candidate,
    context::Context,
    error::{EvalError, Result},
    evaluator::Navigator,
};

/// `lhs = rhs`
///
/// Both sides are evaluated against the incoming context. Every left match
/// that has a location is replaced with the first right value; if the right
/// side yields nothing the documents are left alone. Returns `context`.
pub fn assign(navigator: &mut Navigator, context: &Context, expression: &ExpressionNode) -> Result<Context> {
    debug!("Assign operator");
    let targets = navigator.evaluate(&context.read_only_clone(), expression.lhs()?)?;
    let values = navigator.evaluate(&context.read_only_clone(), expression.rhs()?)?;

    let Some(value) = values.matches.first() else {
        trace!("assign: right side is empty, nothing to do");
        return Ok(context.clone());
    };
    let replacement = value.node.unwrap_document().clone();

    for target in &targets.matches {
        match &target.path {
            Some(path) => {
                trace!("assign: {} {}", target.document, path);
                navigator
                    .documents_mut()
                    .replace_at(target.document, path, replacement.clone())?;
            }
            None => trace!("assign: skipping computed value without a location"),
        }
    }

    Ok(context.clone())
}

/// Rewrites `lhs <op>= rhs` as `lhs = lhs <op> rhs` for every left match.
///
/// Targets are handled one at a time, in order, each through a throwaway
/// `assign(value(target), <op>(value(target), rhs))` tree, so later targets
/// see what earlier ones wrote. Stops at the first error and otherwise
/// returns `context` untouched.
pub fn compound_assign(
    navigator: &mut Navigator,
    context: &Context,
    expression: &ExpressionNode,
    operation: Operation,
) -> Result<Context> {
    let targets = navigator.evaluate(context, expression.lhs()?)?;
    let rhs = expression.rhs.clone().ok_or(EvalError::MissingOperand {
        operation: expression.operation.name(),
        side: "right",
    })?;

    for target in targets.matches {
        let synthetic = assignment_of(target, operation.clone(), Rc::clone(&rhs));
        navigator.evaluate(context, &synthetic)?;
    }

    Ok(context.clone())
}

/// `assign(value(target), <operation>(value(target), rhs))`
fn assignment_of(target: Candidate, operation: Operation, rhs: Rc<ExpressionNode>) -> ExpressionNode {
    let target = Rc::new(ExpressionNode::candidate(target));
    let update = ExpressionNode::binary(operation, Rc::clone(&target), rhs);
    ExpressionNode::assign(target, update)
}
