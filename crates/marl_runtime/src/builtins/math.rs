//! Float math natives, exposed as the `math` record.
//!
//! Every function accepts ints or floats and returns a float, except
//! `floor`, `ceil`, and `trunc`, which narrow back to int.

use crate::Value;
use crate::builtins::common::{expect_arity, to_f64, to_f64_pair};
use crate::errors::{EvalError, messages};
use crate::runtime::Runtime;

pub(crate) fn math_sqrt(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("sqrt", args, f64::sqrt)
}

pub(crate) fn math_abs(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("abs", args, f64::abs)
}

pub(crate) fn math_exp(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("exp", args, f64::exp)
}

pub(crate) fn math_log(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("log", args, f64::ln)
}

pub(crate) fn math_log2(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("log2", args, f64::log2)
}

pub(crate) fn math_log10(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("log10", args, f64::log10)
}

pub(crate) fn math_sin(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("sin", args, f64::sin)
}

pub(crate) fn math_cos(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("cos", args, f64::cos)
}

pub(crate) fn math_tan(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    unary("tan", args, f64::tan)
}

pub(crate) fn math_pow(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    binary("pow", args, f64::powf)
}

pub(crate) fn math_atan2(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    binary("atan2", args, f64::atan2)
}

pub(crate) fn math_hypot(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    binary("hypot", args, f64::hypot)
}

pub(crate) fn math_floor(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    narrow("floor", args, f64::floor)
}

pub(crate) fn math_ceil(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    narrow("ceil", args, f64::ceil)
}

pub(crate) fn math_trunc(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    narrow("trunc", args, f64::trunc)
}

fn unary(name: &str, args: &[Value], f: fn(f64) -> f64) -> Result<Value, EvalError> {
    expect_arity(name, args, 1)?;
    Ok(Value::Float(f(to_f64(name, &args[0])?)))
}

fn binary(name: &str, args: &[Value], f: fn(f64, f64) -> f64) -> Result<Value, EvalError> {
    expect_arity(name, args, 2)?;
    let (a, b) = to_f64_pair(name, &args[0], &args[1])?;
    Ok(Value::Float(f(a, b)))
}

fn narrow(name: &str, args: &[Value], f: fn(f64) -> f64) -> Result<Value, EvalError> {
    expect_arity(name, args, 1)?;
    let rounded = f(to_f64(name, &args[0])?);
    if !rounded.is_finite() {
        return Err(EvalError::Type(messages::non_finite(name)));
    }
    Ok(Value::Int(rounded as i64))
}
