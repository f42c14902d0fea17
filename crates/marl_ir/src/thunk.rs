//! Compiled form of a module: a tree of deferred evaluation units.
//!
//! Each `Thunk` is evaluated against an environment supplied later; nothing
//! is evaluated during lowering. The shapes that defer work (`If`, `Switch`,
//! `Func`, `Record`, `Extern`) make the deferral explicit; the rest exist so
//! the evaluator walks one uniform tree.
use std::rc::Rc;

use marl_syntax::Span;

use crate::ast::FnDefExpr;

/// A lowered module: its statements in source order.
#[derive(Clone, Debug)]
pub struct Program {
    pub stmts: Box<[ThunkStmt]>,
}

#[derive(Clone, Debug)]
pub enum ThunkStmt {
    Assign { name: String, value: Thunk },
    /// Echoes `text` (the statement's own source, resolved during
    /// lowering), then evaluates and discards `value`.
    Extern { value: Thunk, text: Rc<str> },
    Error(Span),
}

#[derive(Clone, Debug)]
pub enum Thunk {
    Str(Rc<str>),
    Int(i64),
    Float(f64),
    /// Name lookup through the scope chain.
    Load(String),
    List(Box<[Thunk]>),
    /// Runs its statements in a fresh child scope, then freezes it.
    Record(Box<[ThunkStmt]>),
    If(Box<IfThunk>),
    Switch(Box<SwitchThunk>),
    /// Produces a closure over the defining environment.
    Func(Rc<FuncThunk>),
    Call(Box<CallThunk>),
    Attr(Box<AttrThunk>),
    Error(Span),
}

/// Deferred function body. Stays un-lowered until the first call; `src` is
/// the module text its spans refer to, kept so nested extern statements can
/// still resolve their echo text when the body is finally lowered.
#[derive(Clone, Debug)]
pub struct FuncThunk {
    pub def: FnDefExpr,
    pub src: Rc<str>,
}

#[derive(Clone, Debug)]
pub struct IfThunk {
    pub cond: Thunk,
    pub then: Thunk,
    pub otherwise: Thunk,
}

#[derive(Clone, Debug)]
pub struct SwitchThunk {
    pub scrutinee: Thunk,
    pub cases: Box<[CaseThunk]>,
}

#[derive(Clone, Debug)]
pub struct CaseThunk {
    pub guard: Thunk,
    pub body: Thunk,
}

#[derive(Clone, Debug)]
pub struct CallThunk {
    pub callee: Thunk,
    pub args: Box<[Thunk]>,
}

#[derive(Clone, Debug)]
pub struct AttrThunk {
    pub object: Thunk,
    pub name: String,
}
