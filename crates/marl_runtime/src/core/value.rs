//! Value model.
//!
//! Values are immutable and cheap to clone: strings, lists, records, and
//! closures all hand out `Rc` handles. A record is a frozen scope frame;
//! once built it never changes, so sharing is safe without copy-on-write.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use marl_ir::{FuncThunk, Thunk, lower_expr};

use crate::builtins_registry::NativeFn;
use crate::core::env::Env;
use crate::errors::{EvalError, messages};

/// Ordered name→value map. Insertion order is observable: it drives record
/// rendering and JSON key order.
pub(crate) type Fields = IndexMap<String, Value, ahash::RandomState>;

#[derive(Clone, Debug)]
pub enum Value {
    Str(Rc<str>),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Rc<[Value]>),
    Record(Rc<Record>),
    Closure(Rc<Closure>),
    Native(Native),
}

impl Value {
    pub fn str(s: &str) -> Value {
        Value::Str(Rc::from(s))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Closure(_) => "fn",
            Value::Native(_) => "native fn",
        }
    }

    /// `false`, `0`, `0.0`, `""`, `[]` and `{}` are falsy; everything else,
    /// functions included, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Record(record) => !record.is_empty(),
            Value::Closure(_) | Value::Native(_) => true,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Native(_))
    }
}

impl PartialEq for Value {
    /// Language equality: numbers compare across int/float, strings and
    /// bools by content, lists elementwise, records by entries regardless
    /// of field order, functions by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a.fields == b.fields,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => a == b,
            _ => false,
        }
    }
}

/// Immutable ordered mapping produced by freezing a finished scope frame.
#[derive(Clone, Debug, Default)]
pub struct Record {
    fields: Fields,
}

impl Record {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// User function: the un-lowered definition plus the captured environment.
///
/// The body lowers on first call and the result is cached; lowering is a
/// pure tree rewrite, so every call can share it.
pub struct Closure {
    pub func: Rc<FuncThunk>,
    pub env: Env,
    body: OnceCell<Thunk>,
}

impl Closure {
    pub(crate) fn new(func: Rc<FuncThunk>, env: Env) -> Self {
        Self {
            func,
            env,
            body: OnceCell::new(),
        }
    }

    pub fn params(&self) -> &[String] {
        &self.func.def.params
    }

    pub(crate) fn body(&self) -> &Thunk {
        self.body
            .get_or_init(|| lower_expr(&self.func.def.body, &self.func.src))
    }
}

impl fmt::Debug for Closure {
    // The captured environment can contain this closure; keep Debug flat.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.func.def.params)
            .finish_non_exhaustive()
    }
}

/// Builtin function value. `name` is the registration name and shows up in
/// rendering and error text.
#[derive(Clone, Copy)]
pub struct Native {
    pub name: &'static str,
    pub f: NativeFn,
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native({})", self.name)
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.f, other.f)
    }
}

/// Attribute access with the privacy rule: a leading `_` is refused before
/// anything else is considered, even whether the field exists or whether
/// `value` is a record at all.
pub fn get_attribute(value: &Value, name: &str) -> Result<Value, EvalError> {
    if name.starts_with('_') {
        return Err(EvalError::Access(name.to_string()));
    }
    let Value::Record(record) = value else {
        return Err(EvalError::Type(messages::attr_on_non_record(
            value.type_name(),
        )));
    };
    record
        .get(name)
        .cloned()
        .ok_or_else(|| EvalError::Name(name.to_string()))
}
