//! Operator implementations dispatched by [`crate::Navigator::evaluate`].
//!
//! Every handler receives the navigator, the current context and whatever
//! it needs from the expression node, and returns a new context.

mod add;
mod assign;
mod flow;
mod traverse;

pub use add::{add, add_assign, add_operator, format_float};
pub use assign::{assign, compound_assign};
pub use flow::{bind_variable, get_variable, pipe, union};
pub use traverse::traverse;
