//! # Expression trees
//!
//! The parser (not part of this crate) turns query text into an
//! [`ExpressionNode`] tree. Each node pairs an [`Operation`] with up to two
//! children:
//!
//! ```text
//! .a += 1            AddAssign
//!                    ├── TraversePath("a")
//!                    └── Value(1)
//!
//! .a as $x | $x      Pipe
//!                    ├── BindVariable("x")
//!                    │   └── TraversePath("a")
//!                    └── GetVariable("x")
//! ```
//!
//! Binary operators read both children; leaves carry everything they need
//! inside the [`Operation`] itself.
pub mod expressions;
pub mod operators;

pub use expressions::ExpressionNode;
pub use operators::Operation;
