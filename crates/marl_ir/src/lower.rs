//! AST → thunk lowering.
//!
//! A pure tree rewrite; evaluates nothing. Lives here rather than in the
//! driver because the runtime also lowers: a closure's body is lowered at
//! its first call, not at definition.
//!
//! `src` must be the exact text the AST's spans index into. Extern echo
//! text is resolved here, so the resulting `Program` is self-contained and
//! the evaluator never sees the source.
use std::rc::Rc;

use crate::ast;
use crate::thunk::{
    AttrThunk, CallThunk, CaseThunk, FuncThunk, IfThunk, Program, SwitchThunk, Thunk, ThunkStmt,
};

pub fn lower_module(module: &ast::Module, src: &Rc<str>) -> Program {
    Program {
        stmts: module.stmts.iter().map(|s| lower_stmt(s, src)).collect(),
    }
}

fn lower_stmt(stmt: &ast::Stmt, src: &Rc<str>) -> ThunkStmt {
    match stmt {
        ast::Stmt::Assign(a) => ThunkStmt::Assign {
            name: a.name.clone(),
            value: lower_expr(&a.value, src),
        },
        ast::Stmt::Extern(e) => {
            let start = e.span.start.0 as usize;
            let end = (e.span.end.0 as usize).min(src.len());
            ThunkStmt::Extern {
                value: lower_expr(&e.expr, src),
                text: Rc::from(&src[start.min(end)..end]),
            }
        }
        ast::Stmt::Error(span) => ThunkStmt::Error(*span),
    }
}

pub fn lower_expr(expr: &ast::Expr, src: &Rc<str>) -> Thunk {
    match expr {
        ast::Expr::Ident(name, _) => Thunk::Load(name.clone()),
        ast::Expr::Int(v, _) => Thunk::Int(*v),
        ast::Expr::Float(v, _) => Thunk::Float(*v),
        ast::Expr::Str(s, _) => Thunk::Str(Rc::from(s.as_str())),
        ast::Expr::List(items) => {
            Thunk::List(items.iter().map(|e| lower_expr(e, src)).collect())
        }
        ast::Expr::Record(module) => {
            Thunk::Record(module.stmts.iter().map(|s| lower_stmt(s, src)).collect())
        }
        ast::Expr::If(e) => Thunk::If(Box::new(IfThunk {
            cond: lower_expr(&e.cond, src),
            then: lower_expr(&e.then, src),
            otherwise: lower_expr(&e.otherwise, src),
        })),
        ast::Expr::Switch(e) => Thunk::Switch(Box::new(SwitchThunk {
            scrutinee: lower_expr(&e.scrutinee, src),
            cases: e
                .cases
                .iter()
                .map(|arm| CaseThunk {
                    guard: lower_expr(&arm.guard, src),
                    body: lower_expr(&arm.body, src),
                })
                .collect(),
        })),
        ast::Expr::FnDef(def) => Thunk::Func(Rc::new(FuncThunk {
            def: (**def).clone(),
            src: src.clone(),
        })),
        ast::Expr::Call(call) => Thunk::Call(Box::new(CallThunk {
            callee: lower_expr(&call.callee, src),
            args: call.args.iter().map(|e| lower_expr(e, src)).collect(),
        })),
        ast::Expr::Attr(attr) => Thunk::Attr(Box::new(AttrThunk {
            object: lower_expr(&attr.object, src),
            name: attr.name.clone(),
        })),
        // Grouping is purely syntactic.
        ast::Expr::Group(inner) => lower_expr(inner, src),
        ast::Expr::Error(span) => Thunk::Error(*span),
    }
}
