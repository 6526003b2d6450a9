use log::trace;

use crate::{
    ast::{ExpressionNode, Operation},
    candidate::Candidate,
    context::Context,
    documents::Documents,
    error::Result,
    operators,
};

/// How the cross function pairs left and right matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Every left match with every right match, left-major
    #[default]
    CartesianProduct,
    /// i-th left with i-th right; extra matches on the longer side are dropped
    OneToOne,
}

/// The expression evaluator.
///
/// Owns the loaded documents for the duration of the evaluation and walks
/// expression trees against a [`Context`].
///
/// # Examples
///
/// ```
/// use treeq::{Documents, ExpressionNode, Navigator};
/// use treeq::node::Node;
///
/// let mut documents = Documents::new();
/// documents.add(Node::mapping(vec![(Node::string("a"), Node::int(10))]));
///
/// let mut navigator = Navigator::new(documents);
/// let context = navigator.root_context();
///
/// // .a += 1
/// let expr = ExpressionNode::add_assign(
///     ExpressionNode::traverse("a"),
///     ExpressionNode::value(Node::int(1)),
/// );
/// navigator.evaluate(&context, &expr).unwrap();
///
/// let root = navigator.documents().iter().next().unwrap().1;
/// assert_eq!(root.get_key("a"), Some(&Node::int(11)));
/// ```
#[derive(Debug, Default)]
pub struct Navigator {
    documents: Documents,
}

impl Navigator {
    pub fn new(documents: Documents) -> Self {
        Navigator { documents }
    }

    pub fn documents(&self) -> &Documents {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut Documents {
        &mut self.documents
    }

    pub fn into_documents(self) -> Documents {
        self.documents
    }

    /// Context matching the root of every loaded document, in load order.
    pub fn root_context(&self) -> Context {
        Context::new(
            self.documents
                .iter()
                .map(|(id, root)| Candidate::root(id, root.clone()))
                .collect(),
        )
    }

    /// Re-reads a candidate from its document so it reflects assignments
    /// made since it was matched. Candidates without a path, or whose path
    /// does not exist yet, come back unchanged.
    pub fn current(&self, candidate: &Candidate) -> Candidate {
        let live = candidate
            .path
            .as_ref()
            .and_then(|path| self.documents.resolve(candidate.document, path));
        match live {
            Some(node) => Candidate {
                node,
                ..candidate.clone()
            },
            None => candidate.clone(),
        }
    }

    /// Evaluates `expression` against `context` and returns the new context.
    ///
    /// Pure dispatch: whatever error the operator raises is returned as is.
    pub fn evaluate(&mut self, context: &Context, expression: &ExpressionNode) -> Result<Context> {
        trace!(
            "evaluating {} against {} match(es)",
            expression.operation.name(),
            context.len()
        );
        match &expression.operation {
            Operation::SelfReference => Ok(context.clone()),
            Operation::Value(candidate) => Ok(context.single_child(candidate.clone())),
            Operation::TraversePath(segment) => operators::traverse(self, context, segment),
            Operation::GetVariable(name) => operators::get_variable(context, name),
            Operation::Pipe => operators::pipe(self, context, expression),
            Operation::Union => operators::union(self, context, expression),
            Operation::BindVariable(name) => operators::bind_variable(self, context, expression, name),
            Operation::Add => operators::add_operator(self, context, expression),
            Operation::Assign => operators::assign(self, context, expression),
            Operation::AddAssign => operators::add_assign(self, context, expression),
        }
    }
}

/// Shared evaluation strategy of every binary operator.
///
/// Evaluates both children against independent clones of `context`, pairs
/// the results according to `pairing` and calls `combine` once per pair.
/// The first error aborts the whole application; on success the results
/// keep pairing order and the variables of `context` are preserved.
pub fn cross_function<F>(
    navigator: &mut Navigator,
    context: &Context,
    expression: &ExpressionNode,
    mut combine: F,
    pairing: Pairing,
) -> Result<Context>
where
    F: FnMut(&mut Navigator, &Context, Candidate, Candidate) -> Result<Candidate>,
{
    let left = navigator.evaluate(&context.read_only_clone(), expression.lhs()?)?;
    let right = navigator.evaluate(&context.read_only_clone(), expression.rhs()?)?;

    let mut results = Vec::new();
    match pairing {
        Pairing::CartesianProduct => {
            trace!(
                "cross function: {} x {} pairs",
                left.len(),
                right.len()
            );
            results.reserve(left.len() * right.len());
            for lhs in &left.matches {
                for rhs in &right.matches {
                    results.push(combine(navigator, context, lhs.clone(), rhs.clone())?);
                }
            }
        }
        Pairing::OneToOne => {
            if left.len() != right.len() {
                trace!(
                    "cross function: pairing {} left with {} right match(es) positionally",
                    left.len(),
                    right.len()
                );
            }
            for (lhs, rhs) in left.matches.iter().zip(&right.matches) {
                results.push(combine(navigator, context, lhs.clone(), rhs.clone())?);
            }
        }
    }

    Ok(context.child(results))
}
