use crate::{candidate::Candidate, path::PathSegment};

/// Operator kinds understood by the evaluator.
///
/// Closed on purpose: [`crate::Navigator::evaluate`] matches exhaustively,
/// so adding a variant is a compile error until it has a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    // Leaves
    /// Current selection (`.`)
    SelfReference,
    /// Constant value, yielded once
    Value(Candidate),
    /// Child access (`.key`, `[0]`)
    TraversePath(PathSegment),
    /// Bound variable (`$name`)
    GetVariable(String),

    // Plumbing
    /// Feed the left result into the right expression (`|`)
    Pipe,
    /// Concatenate both results (`,`)
    Union,
    /// Bind the left result to a variable (`lhs as $name`)
    BindVariable(String),

    // Arithmetic
    /// Kind-dependent merge (`+`)
    Add,

    // Assignment
    /// Replace every left match with the first right value (`=`)
    Assign,
    /// `lhs = lhs + rhs` for every left match (`+=`)
    AddAssign,
}

impl Operation {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SelfReference => "self",
            Operation::Value(_) => "value",
            Operation::TraversePath(_) => "traverse",
            Operation::GetVariable(_) => "get variable",
            Operation::Pipe => "pipe",
            Operation::Union => "union",
            Operation::BindVariable(_) => "bind variable",
            Operation::Add => "add",
            Operation::Assign => "assign",
            Operation::AddAssign => "add assign",
        }
    }
}
