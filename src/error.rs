use thiserror::Error;

use crate::{
    candidate::DocumentId,
    node::{NodeKind, Tag},
    path::PathSegment,
};

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur during expression evaluation.
///
/// Errors are never wrapped on the way up: the first one raised by an
/// operator is what the caller of [`crate::Navigator::evaluate`] sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The operator has no semantics for this operand kind (e.g. merging mappings)
    #[error("{kind} operands are not supported for {operation}")]
    UnsupportedOperandKind {
        kind: NodeKind,
        operation: &'static str,
    },

    /// A scalar was combined with a non-scalar
    #[error("{rhs_tag} ({rhs_path}) cannot be added to a {lhs_tag}")]
    TypeMismatch {
        rhs_tag: Tag,
        /// Rendered path of the right operand, `<computed>` when it has none
        rhs_path: String,
        lhs_tag: Tag,
    },

    /// Scalar text did not parse as the number its tag claims
    #[error("cannot parse {text:?} as {tag}: {reason}")]
    NumericParseFailure {
        text: String,
        tag: Tag,
        reason: String,
    },

    /// No scalar coercion rule applies to this pair of tags
    #[error("{lhs_tag} cannot be added to {rhs_tag}")]
    UnsupportedTagCombination { lhs_tag: Tag, rhs_tag: Tag },

    /// Integer addition left the 64-bit range
    #[error("integer overflow computing {lhs} + {rhs}")]
    IntegerOverflow { lhs: i64, rhs: i64 },

    /// Path segment cannot be applied to this kind of node
    #[error("cannot traverse {segment} on a {kind} ({tag})")]
    TraverseMismatch {
        segment: PathSegment,
        kind: NodeKind,
        tag: Tag,
    },

    /// Assignment targets a document the store does not hold
    #[error("unknown document {0}")]
    UnknownDocument(DocumentId),

    /// Expression node is missing a child its operation requires
    #[error("{operation} expression is missing its {side} operand")]
    MissingOperand {
        operation: &'static str,
        side: &'static str,
    },
}
