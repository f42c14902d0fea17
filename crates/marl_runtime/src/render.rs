//! Value rendering.
//!
//! Two forms: [`value_to_display`] is the bare form `trace` and `format`
//! use, where a top-level string prints without quotes; [`value_to_literal`]
//! quotes strings and is what the REPL and error messages show. Inside
//! containers both use the literal form.

use marl_syntax::quote;

use crate::core::value::Value;

pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::Str(s) => s.to_string(),
        other => value_to_literal(other),
    }
}

pub fn value_to_literal(value: &Value) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Str(s) => out.push_str(&quote(s)),
        Value::Int(v) => out.push_str(itoa::Buffer::new().format(*v)),
        Value::Float(v) => out.push_str(ryu::Buffer::new().format(*v)),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        Value::Record(record) => {
            if record.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (name, field)) in record.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(name);
                out.push_str(" = ");
                write_literal(out, field);
            }
            out.push('}');
        }
        Value::Closure(closure) => {
            out.push_str("<fn(");
            for (i, param) in closure.params().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(param);
            }
            out.push_str(")>");
        }
        Value::Native(native) => {
            out.push_str("<native ");
            out.push_str(native.name);
            out.push('>');
        }
    }
}
