//! Arithmetic and comparison natives.
//!
//! `int op int` stays integral, promoting to float when the result leaves
//! the `i64` range; any float operand makes the whole operation a float.
//! `add` doubles as string and list concatenation. `div` is true division
//! and always returns a float, with IEEE semantics for zero divisors.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::Value;
use crate::builtins::common::{expect_arity, to_f64_pair};
use crate::errors::{EvalError, messages};
use crate::runtime::Runtime;

pub(crate) fn builtin_add(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("add", args, 2)?;
    add_values("add", &args[0], &args[1])
}

pub(crate) fn builtin_sub(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("sub", args, 2)?;
    num_binop("sub", &args[0], &args[1], i64::checked_sub, |a, b| a - b)
}

pub(crate) fn builtin_mul(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("mul", args, 2)?;
    num_binop("mul", &args[0], &args[1], i64::checked_mul, |a, b| a * b)
}

pub(crate) fn builtin_div(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("div", args, 2)?;
    let (a, b) = to_f64_pair("div", &args[0], &args[1])?;
    Ok(Value::Float(a / b))
}

pub(crate) fn builtin_mod(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("mod", args, 2)?;
    match (&args[0], &args[1]) {
        (Value::Int(_), Value::Int(0)) => Err(EvalError::Type(messages::MOD_ZERO.into())),
        (Value::Int(a), Value::Int(b)) => {
            // Result takes the divisor's sign.
            let rem = a.checked_rem(*b).unwrap_or(0);
            let adjusted = if rem != 0 && (rem < 0) != (*b < 0) {
                rem + b
            } else {
                rem
            };
            Ok(Value::Int(adjusted))
        }
        _ => {
            let (a, b) = to_f64_pair("mod", &args[0], &args[1])?;
            if b == 0.0 {
                return Err(EvalError::Type(messages::MOD_ZERO.into()));
            }
            Ok(Value::Float(a - b * (a / b).floor()))
        }
    }
}

pub(crate) fn builtin_neg(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("neg", args, 1)?;
    match &args[0] {
        Value::Int(v) => Ok(v
            .checked_neg()
            .map(Value::Int)
            .unwrap_or(Value::Float(-(*v as f64)))),
        Value::Float(v) => Ok(Value::Float(-v)),
        other => Err(EvalError::Type(messages::expected_number(
            "neg",
            other.type_name(),
        ))),
    }
}

pub(crate) fn builtin_abs(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("abs", args, 1)?;
    match &args[0] {
        Value::Int(v) => Ok(v
            .checked_abs()
            .map(Value::Int)
            .unwrap_or(Value::Float((*v as f64).abs()))),
        Value::Float(v) => Ok(Value::Float(v.abs())),
        other => Err(EvalError::Type(messages::expected_number(
            "abs",
            other.type_name(),
        ))),
    }
}

pub(crate) fn builtin_eq(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("eq", args, 2)?;
    Ok(Value::Bool(args[0] == args[1]))
}

pub(crate) fn builtin_ne(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("ne", args, 2)?;
    Ok(Value::Bool(args[0] != args[1]))
}

pub(crate) fn builtin_lt(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("lt", args, 2)?;
    let ord = order("lt", &args[0], &args[1])?;
    Ok(Value::Bool(matches!(ord, Some(Ordering::Less))))
}

pub(crate) fn builtin_le(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("le", args, 2)?;
    let ord = order("le", &args[0], &args[1])?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Less | Ordering::Equal)
    )))
}

pub(crate) fn builtin_gt(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("gt", args, 2)?;
    let ord = order("gt", &args[0], &args[1])?;
    Ok(Value::Bool(matches!(ord, Some(Ordering::Greater))))
}

pub(crate) fn builtin_ge(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("ge", args, 2)?;
    let ord = order("ge", &args[0], &args[1])?;
    Ok(Value::Bool(matches!(
        ord,
        Some(Ordering::Greater | Ordering::Equal)
    )))
}

pub(crate) fn builtin_not(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("not", args, 1)?;
    Ok(Value::Bool(!args[0].is_truthy()))
}

/// Shared by `add` and `concat` so each reports under its own name.
pub(crate) fn add_values(name: &str, a: &Value, b: &Value) -> Result<Value, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(int_or_promote(*x, *y, i64::checked_add, |a, b| {
            a + b
        })),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 + y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x + *y as f64)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),
        (Value::Str(x), Value::Str(y)) => {
            let mut out = String::with_capacity(x.len() + y.len());
            out.push_str(x);
            out.push_str(y);
            Ok(Value::Str(Rc::from(out)))
        }
        (Value::List(x), Value::List(y)) => {
            let mut items = Vec::with_capacity(x.len() + y.len());
            items.extend_from_slice(x);
            items.extend_from_slice(y);
            Ok(Value::List(items.into()))
        }
        _ => Err(EvalError::Type(messages::cannot_add(
            name,
            a.type_name(),
            b.type_name(),
        ))),
    }
}

fn num_binop(
    name: &str,
    a: &Value,
    b: &Value,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(int_or_promote(*x, *y, checked, float)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(float(*x as f64, *y))),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(float(*x, *y as f64))),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(float(*x, *y))),
        _ => Err(EvalError::Type(messages::expected_two_numbers(
            name,
            a.type_name(),
            b.type_name(),
        ))),
    }
}

fn int_or_promote(
    x: i64,
    y: i64,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Value {
    match checked(x, y) {
        Some(v) => Value::Int(v),
        // Out of the i64 range: promote, approximating the reference
        // semantics of unbounded integers.
        None => Value::Float(float(x as f64, y as f64)),
    }
}

fn order(name: &str, a: &Value, b: &Value) -> Result<Option<Ordering>, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(Some(x.cmp(y))),
        (Value::Int(x), Value::Float(y)) => Ok((*x as f64).partial_cmp(y)),
        (Value::Float(x), Value::Int(y)) => Ok(x.partial_cmp(&(*y as f64))),
        (Value::Float(x), Value::Float(y)) => Ok(x.partial_cmp(y)),
        (Value::Str(x), Value::Str(y)) => Ok(Some(x.cmp(y))),
        _ => Err(EvalError::Type(messages::ordered_operands(
            name,
            a.type_name(),
            b.type_name(),
        ))),
    }
}
