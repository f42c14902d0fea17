//! Builtin tables.
//!
//! Builtins are ordinary record values bound in the root environment
//! (`builtins`, `math`), so user code reaches them through the same
//! attribute path as any other record. The registry collects registrations
//! and freezes each table into a record; [`BuiltinProvider`] keeps the set
//! swappable for embedding and tests.

use std::rc::Rc;

use crate::builtins;
use crate::core::env::Env;
use crate::core::value::{Fields, Native, Record, Value};
use crate::errors::EvalError;
use crate::runtime::Runtime;

pub type NativeFn = fn(&mut Runtime, &[Value]) -> Result<Value, EvalError>;

#[derive(Default)]
pub struct BuiltinRegistry {
    root: Vec<(&'static str, Value)>,
    tables: Vec<(&'static str, Fields)>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a plain value directly in the root frame.
    pub fn define(&mut self, name: &'static str, value: Value) {
        self.root.push((name, value));
    }

    /// Register a native function under `table.name`.
    pub fn register(&mut self, table: &'static str, name: &'static str, f: NativeFn) {
        self.register_value(table, name, Value::Native(Native { name, f }));
    }

    /// Register a constant under `table.name`.
    pub fn register_value(&mut self, table: &'static str, name: &'static str, value: Value) {
        self.table_mut(table).insert(name.to_string(), value);
    }

    fn table_mut(&mut self, table: &'static str) -> &mut Fields {
        let index = match self.tables.iter().position(|(name, _)| *name == table) {
            Some(index) => index,
            None => {
                self.tables.push((table, Fields::default()));
                self.tables.len() - 1
            }
        };
        &mut self.tables[index].1
    }

    pub fn install_into(self, env: &Env) {
        for (name, value) in self.root {
            env.define(name, value);
        }
        for (name, fields) in self.tables {
            env.define(name, Value::Record(Rc::new(Record::from_fields(fields))));
        }
    }
}

pub trait BuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry);
}

/// The standard root bindings: `true`, `false`, `builtins`, `math`.
pub struct StdBuiltinProvider;

impl BuiltinProvider for StdBuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry) {
        registry.define("true", Value::Bool(true));
        registry.define("false", Value::Bool(false));

        registry.register("builtins", "concat", builtins::builtin_concat);
        registry.register("builtins", "trace", builtins::builtin_trace);
        registry.register("builtins", "format", builtins::builtin_format);
        registry.register("builtins", "len", builtins::builtin_len);
        registry.register("builtins", "get", builtins::builtin_get);
        registry.register("builtins", "add", builtins::builtin_add);
        registry.register("builtins", "sub", builtins::builtin_sub);
        registry.register("builtins", "mul", builtins::builtin_mul);
        registry.register("builtins", "div", builtins::builtin_div);
        registry.register("builtins", "mod", builtins::builtin_mod);
        registry.register("builtins", "neg", builtins::builtin_neg);
        registry.register("builtins", "abs", builtins::builtin_abs);
        registry.register("builtins", "eq", builtins::builtin_eq);
        registry.register("builtins", "ne", builtins::builtin_ne);
        registry.register("builtins", "lt", builtins::builtin_lt);
        registry.register("builtins", "le", builtins::builtin_le);
        registry.register("builtins", "gt", builtins::builtin_gt);
        registry.register("builtins", "ge", builtins::builtin_ge);
        registry.register("builtins", "not", builtins::builtin_not);

        registry.register_value("math", "pi", Value::Float(std::f64::consts::PI));
        registry.register_value("math", "e", Value::Float(std::f64::consts::E));
        registry.register_value("math", "tau", Value::Float(std::f64::consts::TAU));
        registry.register_value("math", "inf", Value::Float(f64::INFINITY));
        registry.register_value("math", "nan", Value::Float(f64::NAN));
        registry.register("math", "sqrt", builtins::math_sqrt);
        registry.register("math", "floor", builtins::math_floor);
        registry.register("math", "ceil", builtins::math_ceil);
        registry.register("math", "trunc", builtins::math_trunc);
        registry.register("math", "abs", builtins::math_abs);
        registry.register("math", "pow", builtins::math_pow);
        registry.register("math", "exp", builtins::math_exp);
        registry.register("math", "log", builtins::math_log);
        registry.register("math", "log2", builtins::math_log2);
        registry.register("math", "log10", builtins::math_log10);
        registry.register("math", "sin", builtins::math_sin);
        registry.register("math", "cos", builtins::math_cos);
        registry.register("math", "tan", builtins::math_tan);
        registry.register("math", "atan2", builtins::math_atan2);
        registry.register("math", "hypot", builtins::math_hypot);
    }
}
