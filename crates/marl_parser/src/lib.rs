//! marl_parser: parser crate.
//!
//! Converts lexer tokens into a syntax tree (Module/Stmt/Expr) and collects
//! diagnostics. Recursive descent; with no binary operators in the grammar
//! the only precedence concern is the postfix call/attribute chain.
mod expr;
mod parser;

pub use marl_ir::*;
pub use parser::{ExprParseResult, ParseResult, Parser};
