use log::debug;

use crate::{ast::ExpressionNode, context::Context, error::Result, evaluator::Navigator};

/// `lhs | rhs`
pub fn pipe(navigator: &mut Navigator, context: &Context, expression: &ExpressionNode) -> Result<Context> {
    let lhs = navigator.evaluate(context, expression.lhs()?)?;
    navigator.evaluate(&lhs, expression.rhs()?)
}

/// `lhs, rhs`
pub fn union(navigator: &mut Navigator, context: &Context, expression: &ExpressionNode) -> Result<Context> {
    let lhs = navigator.evaluate(&context.read_only_clone(), expression.lhs()?)?;
    let rhs = navigator.evaluate(&context.read_only_clone(), expression.rhs()?)?;

    let mut matches = lhs.matches;
    matches.extend(rhs.matches);
    Ok(context.child(matches))
}

/// `lhs as $name`: keeps the current matches and binds the result of `lhs`.
pub fn bind_variable(
    navigator: &mut Navigator,
    context: &Context,
    expression: &ExpressionNode,
    name: &str,
) -> Result<Context> {
    debug!("Bind variable operator ${}", name);
    let value = navigator.evaluate(&context.read_only_clone(), expression.lhs()?)?;

    let mut result = context.clone();
    result.set_variable(name, value.matches);
    Ok(result)
}

/// `$name`; an unbound variable matches nothing.
pub fn get_variable(context: &Context, name: &str) -> Result<Context> {
    let matches = context.variable(name).map(<[_]>::to_vec).unwrap_or_default();
    Ok(context.child(matches))
}
