//! Evaluation core of a path query language over typed document trees
//! (YAML/JSON-like maps, sequences and tagged scalars).
//!
//! Parsing query text and loading or printing documents happen elsewhere;
//! this crate takes an [`ExpressionNode`] tree plus a set of [`Documents`]
//! and produces the matched or derived nodes, committing assignments back
//! into the documents.
pub mod ast;
pub mod candidate;
pub mod context;
#[cfg(feature = "json")]
pub mod convert;
pub mod documents;
pub mod error;
pub mod evaluator;
pub mod node;
pub mod operators;
pub mod path;

pub use ast::{ExpressionNode, Operation};
pub use candidate::{Candidate, DocumentId};
pub use context::Context;
pub use documents::Documents;
pub use error::{EvalError, Result};
pub use evaluator::{Navigator, Pairing, cross_function};
pub use node::{Node, NodeKind, NodeValue, Style, Tag};
pub use path::{Path, PathSegment};
