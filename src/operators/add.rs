use log::debug;

use crate::{
    ast::{ExpressionNode, Operation},
    candidate::Candidate,
    context::Context,
    error::{EvalError, Result},
    evaluator::{Navigator, Pairing, cross_function},
    node::{Node, NodeKind, NodeValue, Tag},
};

/// `lhs + rhs` over the cartesian product of both sides.
pub fn add_operator(navigator: &mut Navigator, context: &Context, expression: &ExpressionNode) -> Result<Context> {
    debug!("Add operator");
    cross_function(
        navigator,
        &context.read_only_clone(),
        expression,
        add,
        Pairing::CartesianProduct,
    )
}

/// `lhs += rhs`
pub fn add_assign(navigator: &mut Navigator, context: &Context, expression: &ExpressionNode) -> Result<Context> {
    debug!("Add assign operator");
    super::compound_assign(navigator, context, expression, Operation::Add)
}

/// Merges one pair of matches.
///
/// - null + x: x, untouched
/// - sequence + x: concatenation (x's elements if x is a sequence, nothing
///   if x is null, otherwise x itself as one element)
/// - scalar + scalar: see [`add_scalars`]
/// - mapping + x: unsupported
///
/// The result is always a new computed candidate; operands are not modified.
pub fn add(navigator: &mut Navigator, _context: &Context, lhs: Candidate, rhs: Candidate) -> Result<Candidate> {
    let lhs = navigator.current(&lhs);
    let rhs = navigator.current(&rhs);
    let lhs_node = lhs.node.unwrap_document();
    let rhs_node = rhs.node.unwrap_document();

    if lhs_node.is_null() {
        return Ok(lhs.create_child(None, rhs_node.clone()));
    }

    match &lhs_node.value {
        NodeValue::Sequence(items) => {
            let mut content = items.clone();
            content.extend(appended_nodes(rhs_node));
            let merged = Node::sequence(content).with_style(lhs_node.style);
            Ok(lhs.create_child(None, merged))
        }
        NodeValue::Scalar(_) => {
            if rhs_node.kind() != NodeKind::Scalar {
                return Err(EvalError::TypeMismatch {
                    rhs_tag: rhs_node.tag.clone(),
                    rhs_path: rhs.path_display(),
                    lhs_tag: lhs_node.tag.clone(),
                });
            }
            let sum = add_scalars(lhs_node, rhs_node)?.with_style(lhs_node.style);
            Ok(lhs.create_child(None, sum))
        }
        NodeValue::Mapping(_) | NodeValue::Document(_) => Err(EvalError::UnsupportedOperandKind {
            kind: lhs_node.kind(),
            operation: "addition",
        }),
    }
}

/// What a right operand contributes when appended to a sequence.
fn appended_nodes(rhs: &Node) -> Vec<Node> {
    if rhs.is_null() {
        return Vec::new();
    }
    match &rhs.value {
        NodeValue::Sequence(items) => items.clone(),
        _ => vec![rhs.clone()],
    }
}

/// Scalar rules, first match wins:
///
/// 1. `!!str` + anything: text concatenation, right side taken verbatim
/// 2. `!!int` + `!!int`: integer sum
/// 3. `!!int`/`!!float` + `!!int`/`!!float`: float sum
/// 4. anything else: error
fn add_scalars(lhs: &Node, rhs: &Node) -> Result<Node> {
    let lhs_text = lhs.text().unwrap_or_default();
    let rhs_text = rhs.text().unwrap_or_default();

    match (&lhs.tag, &rhs.tag) {
        (Tag::Str, _) => Ok(Node::string(format!("{}{}", lhs_text, rhs_text))),
        (Tag::Int, Tag::Int) => {
            let a = parse_int(lhs_text)?;
            let b = parse_int(rhs_text)?;
            let sum = a
                .checked_add(b)
                .ok_or(EvalError::IntegerOverflow { lhs: a, rhs: b })?;
            Ok(Node::int(sum))
        }
        (l, r) if l.is_numeric() && r.is_numeric() => {
            let a = parse_float(lhs_text)?;
            let b = parse_float(rhs_text)?;
            Ok(Node::float(format_float(a + b)))
        }
        (l, r) => Err(EvalError::UnsupportedTagCombination {
            lhs_tag: l.clone(),
            rhs_tag: r.clone(),
        }),
    }
}

fn parse_int(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|e| EvalError::NumericParseFailure {
        text: text.to_string(),
        tag: Tag::Int,
        reason: e.to_string(),
    })
}

fn parse_float(text: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|e| EvalError::NumericParseFailure {
        text: text.to_string(),
        tag: Tag::Float,
        reason: e.to_string(),
    })
}

/// Default text rendering of a float.
///
/// Shortest digits that round-trip; scientific notation with a signed,
/// two-digit exponent when the decimal exponent is below -4 or at least 6.
///
/// ```
/// use treeq::operators::format_float;
///
/// assert_eq!(format_float(5.5), "5.5");
/// assert_eq!(format_float(3.0), "3");
/// assert_eq!(format_float(1e6), "1e+06");
/// assert_eq!(format_float(0.00001), "1e-05");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };

    if (-4..6).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
