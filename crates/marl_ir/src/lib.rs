//!
//!
//!
mod ast;
mod lower;
mod thunk;

pub use ast::*;
pub use lower::{lower_expr, lower_module};
pub use thunk::*;
