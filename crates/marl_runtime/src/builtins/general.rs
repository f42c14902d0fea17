//! General-purpose natives: tracing, formatting, length and indexing.

use std::rc::Rc;

use crate::Value;
use crate::builtins::common::expect_arity;
use crate::builtins::ops::add_values;
use crate::core::value::get_attribute;
use crate::errors::{EvalError, messages};
use crate::render::value_to_display;
use crate::runtime::Runtime;

pub(crate) fn builtin_concat(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("concat", args, 2)?;
    add_values("concat", &args[0], &args[1])
}

/// `trace(x)` or `trace(x, y)`: writes the display form of `x` to the
/// output sink, then passes `y` (or `""`) through as the result.
pub(crate) fn builtin_trace(rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [x] => {
            let line = value_to_display(x);
            rt.write_line(&line);
            Ok(Value::str(""))
        }
        [x, y] => {
            let line = value_to_display(x);
            rt.write_line(&line);
            Ok(y.clone())
        }
        _ => {
            let expected = format!("1 or 2 arguments, got {}", args.len());
            Err(EvalError::Type(messages::arg_count("trace", &expected)))
        }
    }
}

/// `format(template, ...)`: each `{}` consumes the next value in its
/// display form; `{{` and `}}` escape literal braces. Placeholder and
/// value counts must agree exactly.
pub(crate) fn builtin_format(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    let [template, rest @ ..] = args else {
        return Err(EvalError::Type(messages::arg_count(
            "format",
            "a template string",
        )));
    };
    let Value::Str(template) = template else {
        return Err(EvalError::Type(messages::format_template(
            template.type_name(),
        )));
    };

    let mut out = String::with_capacity(template.len());
    let mut used = 0usize;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                let Some(arg) = rest.get(used) else {
                    return Err(EvalError::Type(messages::format_mismatch(rest.len())));
                };
                out.push_str(&value_to_display(arg));
                used += 1;
            }
            '{' | '}' => return Err(EvalError::Type(messages::FORMAT_BRACE.into())),
            _ => out.push(c),
        }
    }
    if used != rest.len() {
        return Err(EvalError::Type(messages::format_mismatch(rest.len())));
    }
    Ok(Value::Str(Rc::from(out)))
}

pub(crate) fn builtin_len(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("len", args, 1)?;
    let n = match &args[0] {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Record(record) => record.len(),
        other => {
            return Err(EvalError::Type(messages::len_operand(other.type_name())));
        }
    };
    Ok(Value::Int(n as i64))
}

/// `get(list, index)` with negative indices counting from the end, or
/// `get(record, name)` under the same privacy rule as `.` access.
pub(crate) fn builtin_get(_rt: &mut Runtime, args: &[Value]) -> Result<Value, EvalError> {
    expect_arity("get", args, 2)?;
    match (&args[0], &args[1]) {
        (Value::List(items), Value::Int(index)) => {
            let len = items.len() as i64;
            let resolved = if *index < 0 {
                index.checked_add(len).unwrap_or(-1)
            } else {
                *index
            };
            if resolved < 0 || resolved >= len {
                return Err(EvalError::Type(messages::index_out_of_range(
                    *index,
                    items.len(),
                )));
            }
            Ok(items[resolved as usize].clone())
        }
        (Value::Record(_), Value::Str(name)) => get_attribute(&args[0], name),
        (a, b) => Err(EvalError::Type(messages::get_operands(
            a.type_name(),
            b.type_name(),
        ))),
    }
}
