//!
//!
mod analyzer;
mod frontend;

pub use analyzer::analyze_module;
pub use frontend::{CompiledExpr, CompiledSource, Driver, LexedSource, ParsedSource, Timings};
