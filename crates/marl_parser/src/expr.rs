//! Expression parsing.
//!
//! An expression is a primary followed by any number of postfix suffixes
//! (call arguments or attribute access), binding left to right. Compound
//! primaries are keyword-fenced (`if .. endif`, `switch .. end`,
//! `fn .. endfn`), which keeps them unambiguous without layout rules.
use marl_syntax::{Diagnostic, DiagnosticKind, Span, TokenKind, codes, unquote};

use crate::parser::Parser;
use crate::{AttrExpr, CallExpr, CaseArm, Expr, FnDefExpr, IfExpr, Module, SwitchExpr};

impl<'a> Parser<'a> {
    pub(crate) fn parse_expr(&mut self) -> Option<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek_kind() {
                TokenKind::LParen => {
                    self.bump();
                    let args = self.parse_comma_list(TokenKind::RParen)?;
                    expr = Expr::Call(Box::new(CallExpr { callee: expr, args }));
                }
                TokenKind::Dot => {
                    self.bump();
                    let (name, name_span) = self.expect_ident()?;
                    expr = Expr::Attr(Box::new(AttrExpr {
                        object: expr,
                        name,
                        name_span,
                    }));
                }
                _ => break,
            }
        }
        Some(expr)
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        match self.peek_kind() {
            TokenKind::Int => {
                let t = self.bumped();
                let text = self.token_text(&t);
                Some(int_literal(text, t.span))
            }
            TokenKind::Float => {
                let t = self.bumped();
                let v = self.token_text(&t).parse::<f64>().unwrap_or(0.0);
                Some(Expr::Float(v, t.span))
            }
            TokenKind::Str => {
                let t = self.bumped();
                let s = unquote(self.token_text(&t));
                Some(Expr::Str(s, t.span))
            }
            TokenKind::Ident => {
                let t = self.bumped();
                Some(Expr::Ident(self.token_text(&t).to_string(), t.span))
            }
            TokenKind::KwIf => self.parse_if(),
            TokenKind::KwSwitch => self.parse_switch(),
            TokenKind::KwFn => self.parse_fn_def(),
            TokenKind::LBrace => {
                self.bump();
                let stmts = self.parse_stmts_until(TokenKind::RBrace);
                self.expect(TokenKind::RBrace)?;
                Some(Expr::Record(Module { stmts }))
            }
            TokenKind::LBracket => {
                self.bump();
                let items = self.parse_comma_list(TokenKind::RBracket)?;
                Some(Expr::List(items))
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Some(Expr::Group(Box::new(inner)))
            }
            _ => {
                let span = self.cur_span();
                self.diagnostics.push(
                    Diagnostic::error_kind(DiagnosticKind::ExpectedExpression, Some(span))
                        .with_code(codes::PARSE_ERROR),
                );
                None
            }
        }
    }

    fn parse_if(&mut self) -> Option<Expr> {
        self.bump();
        let cond = self.parse_expr()?;
        self.expect(TokenKind::KwThen)?;
        let then = self.parse_expr()?;
        self.expect(TokenKind::KwElse)?;
        let otherwise = self.parse_expr()?;
        self.expect(TokenKind::KwEndif)?;
        Some(Expr::If(Box::new(IfExpr {
            cond,
            then,
            otherwise,
        })))
    }

    fn parse_switch(&mut self) -> Option<Expr> {
        let kw = self.bumped();
        let scrutinee = self.parse_expr()?;
        self.expect(TokenKind::KwOf)?;
        let mut cases: Vec<CaseArm> = Vec::new();
        while !self.at(TokenKind::KwEnd) && !self.at(TokenKind::Eof) {
            let guard = self.parse_expr()?;
            self.expect(TokenKind::Arrow)?;
            let body = self.parse_expr()?;
            self.expect(TokenKind::Semi)?;
            cases.push(CaseArm { guard, body });
        }
        self.expect(TokenKind::KwEnd)?;
        if cases.is_empty() {
            self.diagnostics.push(
                Diagnostic::error_kind(DiagnosticKind::EmptySwitch, Some(kw.span))
                    .with_code(codes::PARSE_ERROR),
            );
        }
        Some(Expr::Switch(Box::new(SwitchExpr {
            scrutinee,
            cases: cases.into_boxed_slice(),
        })))
    }

    fn parse_fn_def(&mut self) -> Option<Expr> {
        self.bump();
        let mut params: Vec<String> = Vec::new();
        if !self.at(TokenKind::Arrow) {
            loop {
                let (name, _) = self.expect_ident()?;
                params.push(name);
                if self.at(TokenKind::Comma) {
                    self.bump();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenKind::Arrow)?;
        let body = self.parse_expr()?;
        self.expect(TokenKind::KwEndfn)?;
        Some(Expr::FnDef(Box::new(FnDefExpr {
            params: params.into_boxed_slice(),
            body,
        })))
    }

    /// Comma-separated expressions up to (and including) `end`. No
    /// trailing comma; used for call arguments and list literals.
    fn parse_comma_list(&mut self, end: TokenKind) -> Option<Box<[Expr]>> {
        let mut items: Vec<Expr> = Vec::new();
        if self.at(end) {
            self.bump();
            return Some(items.into_boxed_slice());
        }
        loop {
            items.push(self.parse_expr()?);
            if self.at(TokenKind::Comma) {
                self.bump();
                continue;
            }
            break;
        }
        self.expect(end)?;
        Some(items.into_boxed_slice())
    }
}

/// A number token with no `.`/exponent still falls back to a float
/// literal when its value does not fit in `i64`.
fn int_literal(text: &str, span: Span) -> Expr {
    match text.parse::<i64>() {
        Ok(v) => Expr::Int(v, span),
        Err(_) => Expr::Float(text.parse::<f64>().unwrap_or(0.0), span),
    }
}
