//! Evaluation errors.
//!
//! Runtime errors carry names or rendered values rather than spans: by the
//! time a thunk runs, source positions belong to the compile-time
//! diagnostics pipeline, not here.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// Unbound name, or a record field that does not exist.
    Name(String),
    /// Attribute starting with `_` reached from outside its record.
    Access(String),
    /// Function called with the wrong number of arguments.
    Arity { expected: usize, given: usize },
    /// No switch case matched; carries the rendered scrutinee.
    NoMatch(String),
    /// Wrong operand kinds, bad native arguments, malformed input.
    Type(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Name(name) => write!(f, "NameError: name '{name}' is not bound"),
            EvalError::Access(name) => {
                write!(f, "AccessError: attribute '{name}' is private")
            }
            EvalError::Arity { expected, given } => write!(
                f,
                "ArityError: expected {expected} argument{}, got {given}",
                if *expected == 1 { "" } else { "s" }
            ),
            EvalError::NoMatch(scrutinee) => {
                write!(f, "NoMatchError: no case matched {scrutinee}")
            }
            EvalError::Type(message) => write!(f, "TypeError: {message}"),
        }
    }
}

impl Error for EvalError {}

/// Message builders for [`EvalError::Type`], kept together so wording stays
/// consistent between the evaluator and the builtin set.
pub(crate) mod messages {
    pub(crate) const MALFORMED: &str = "cannot evaluate source with syntax errors";
    pub(crate) const MOD_ZERO: &str = "mod by zero";
    pub(crate) const FORMAT_BRACE: &str =
        "single '{' or '}' in format template; double it to escape";

    pub(crate) fn not_callable(ty: &str) -> String {
        format!("value of type {ty} is not callable")
    }

    pub(crate) fn attr_on_non_record(ty: &str) -> String {
        format!("attribute access on {ty}; expected a record")
    }

    pub(crate) fn arg_count(name: &str, expected: &str) -> String {
        format!("{name} expects {expected}")
    }

    pub(crate) fn expected_number(name: &str, ty: &str) -> String {
        format!("{name} expects a number, got {ty}")
    }

    pub(crate) fn expected_two_numbers(name: &str, a: &str, b: &str) -> String {
        format!("{name} expects two numbers, got {a} and {b}")
    }

    pub(crate) fn cannot_add(name: &str, a: &str, b: &str) -> String {
        format!("{name} expects two numbers, two strings, or two lists, got {a} and {b}")
    }

    pub(crate) fn ordered_operands(name: &str, a: &str, b: &str) -> String {
        format!("{name} expects two numbers or two strings, got {a} and {b}")
    }

    pub(crate) fn len_operand(ty: &str) -> String {
        format!("len expects a string, list, or record, got {ty}")
    }

    pub(crate) fn index_out_of_range(index: i64, len: usize) -> String {
        format!("index {index} out of range for list of {len}")
    }

    pub(crate) fn get_operands(a: &str, b: &str) -> String {
        format!("get expects (list, int) or (record, string), got ({a}, {b})")
    }

    pub(crate) fn format_template(ty: &str) -> String {
        format!("format expects a string template, got {ty}")
    }

    pub(crate) fn format_mismatch(given: usize) -> String {
        format!(
            "format template placeholders do not match {given} value{}",
            if given == 1 { "" } else { "s" }
        )
    }

    pub(crate) fn non_finite(name: &str) -> String {
        format!("{name} expects a finite number")
    }
}
