use crate::Value;
use crate::errors::{EvalError, messages};

pub(crate) fn expect_arity(name: &str, args: &[Value], n: usize) -> Result<(), EvalError> {
    if args.len() != n {
        let expected = format!(
            "{n} argument{}, got {}",
            if n == 1 { "" } else { "s" },
            args.len()
        );
        return Err(EvalError::Type(messages::arg_count(name, &expected)));
    }
    Ok(())
}

pub(crate) fn to_f64(name: &str, value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Int(v) => Ok(*v as f64),
        Value::Float(v) => Ok(*v),
        other => Err(EvalError::Type(messages::expected_number(
            name,
            other.type_name(),
        ))),
    }
}

pub(crate) fn to_f64_pair(name: &str, a: &Value, b: &Value) -> Result<(f64, f64), EvalError> {
    Ok((to_f64(name, a)?, to_f64(name, b)?))
}
