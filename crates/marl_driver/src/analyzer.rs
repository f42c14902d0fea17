//! Static checks over a parsed module.
//!
//! Nothing here changes evaluation. Same-block redefinition and
//! use-before-definition are warnings only: the evaluator's last-wins and
//! NameError behavior stands, and `check` surfaces the likely mistakes
//! without running anything.
use std::collections::HashMap;

use marl_ir::{Expr, Module, Stmt};
use marl_syntax::{
    Diagnostic, DiagnosticKind, DiagnosticsFormatter, ROOT_BINDINGS, Span, codes, find_best_match,
    is_root_binding,
};

pub fn analyze_module(module: &Module) -> Vec<Diagnostic> {
    let mut analyzer = Analyzer::default();
    analyzer.check_block(&module.stmts);
    analyzer.diagnostics
}

#[derive(Default)]
struct Analyzer {
    /// Per open block, outermost first: name → site of its latest
    /// assignment, for the redefinition note.
    scopes: Vec<HashMap<String, Span>>,
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    fn check_block(&mut self, stmts: &[Stmt]) {
        self.scopes.push(HashMap::new());
        for stmt in stmts {
            match stmt {
                Stmt::Assign(a) => {
                    // RHS first: `x = x` is a use before definition unless
                    // an enclosing block already has `x`.
                    self.check_expr(&a.value);
                    self.define(&a.name, a.name_span);
                }
                Stmt::Extern(e) => self.check_expr(&e.expr),
                Stmt::Error(_) => {}
            }
        }
        self.scopes.pop();
    }

    fn check_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name, span) => self.check_ref(name, *span),
            Expr::Int(..) | Expr::Float(..) | Expr::Str(..) | Expr::Error(_) => {}
            Expr::List(items) => {
                for item in items.iter() {
                    self.check_expr(item);
                }
            }
            Expr::Record(module) => self.check_block(&module.stmts),
            Expr::If(e) => {
                self.check_expr(&e.cond);
                self.check_expr(&e.then);
                self.check_expr(&e.otherwise);
            }
            Expr::Switch(e) => {
                self.check_expr(&e.scrutinee);
                for arm in e.cases.iter() {
                    self.check_expr(&arm.guard);
                    self.check_expr(&arm.body);
                }
            }
            // A function body only runs at call time, possibly after later
            // assignments land in its defining block; skip it entirely.
            Expr::FnDef(_) => {}
            Expr::Call(c) => {
                self.check_expr(&c.callee);
                for arg in c.args.iter() {
                    self.check_expr(arg);
                }
            }
            // Attribute names are record fields, not variables.
            Expr::Attr(a) => self.check_expr(&a.object),
            Expr::Group(inner) => self.check_expr(inner),
        }
    }

    fn check_ref(&mut self, name: &str, span: Span) {
        if is_root_binding(name) || self.scopes.iter().any(|s| s.contains_key(name)) {
            return;
        }
        let mut diag = Diagnostic::warning_kind(
            DiagnosticKind::UseBeforeDefinition(name.to_string()),
            Some(span),
        )
        .with_code(codes::USE_BEFORE_DEFINITION);
        let candidates = self
            .scopes
            .iter()
            .flat_map(|s| s.keys().map(String::as_str))
            .chain(ROOT_BINDINGS.iter().copied());
        if let Some(best) = find_best_match(name, candidates) {
            diag = diag.with_suggestion(DiagnosticsFormatter::format(&DiagnosticKind::DidYouMean(
                best.to_string(),
            )));
        }
        self.diagnostics.push(diag);
    }

    fn define(&mut self, name: &str, span: Span) {
        if let Some(top) = self.scopes.last_mut() {
            if let Some(previous) = top.insert(name.to_string(), span) {
                self.diagnostics.push(
                    Diagnostic::warning_kind(
                        DiagnosticKind::Redefinition(name.to_string()),
                        Some(span),
                    )
                    .with_code(codes::REDEFINITION)
                    .with_label("previous assignment here", previous),
                );
            }
        }
    }
}
