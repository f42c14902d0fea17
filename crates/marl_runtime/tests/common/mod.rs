#![allow(dead_code)]

use marl_driver::{CompiledSource, Driver};
use marl_runtime::{EvalError, Runtime, Value, get_attribute};

/// Compile source, asserting the front end produced no errors (warnings
/// are fine; several tests lean on names the analyzer cannot see).
pub fn compile(src: &str) -> CompiledSource {
    let compiled = Driver::new().compile_text("test.marl", src);
    let errors: Vec<_> = compiled
        .diagnostics
        .iter()
        .filter(|d| d.is_error())
        .collect();
    assert!(errors.is_empty(), "compile errors for {src:?}: {errors:#?}");
    compiled
}

pub fn load(src: &str) -> Result<Value, EvalError> {
    let mut rt = Runtime::new();
    rt.load_module(&compile(src).program)
}

pub fn load_ok(src: &str) -> Value {
    match load(src) {
        Ok(value) => value,
        Err(e) => panic!("evaluation failed for {src:?}: {e}"),
    }
}

pub fn load_err(src: &str) -> EvalError {
    match load(src) {
        Ok(value) => panic!("expected an error for {src:?}, got {value:?}"),
        Err(e) => e,
    }
}

pub fn field(record: &Value, name: &str) -> Value {
    get_attribute(record, name).unwrap_or_else(|e| panic!("field {name}: {e}"))
}
