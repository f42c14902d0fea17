//! marl_runtime: evaluator, builtin tables, and JSON export.
//!
//! The runtime consumes the lowered [`marl_ir::Program`] form. Evaluation
//! walks thunks against a scope chain ([`Env`]); finished scopes freeze into
//! immutable [`Record`] values. Side effects (extern echoes, `trace`) go to a
//! buffered output sink on [`Runtime`] so hosts decide where lines end up.

mod builtins;
mod builtins_registry;
mod core;
mod errors;
mod exec;
mod export;
mod render;
mod runtime;

pub use crate::core::env::Env;
pub use crate::core::value::{Closure, Native, Record, Value, get_attribute};
pub use builtins_registry::{BuiltinProvider, BuiltinRegistry, NativeFn, StdBuiltinProvider};
pub use errors::EvalError;
pub use export::{export, export_string, export_string_pretty};
pub use render::{value_to_display, value_to_literal};
pub use runtime::{Runtime, RuntimeConfig};
