//! Statement-level parsing and token-cursor plumbing.
//!
//! A module is a flat sequence of `NAME = expr` assignments and `:: expr`
//! extern statements; records reuse the same statement loop behind `{`.
//! Parse errors become `Stmt::Error`/`Expr::Error` nodes so a single bad
//! statement does not hide later ones.
use marl_syntax::{Diagnostic, DiagnosticKind, Span, Token, TokenKind, codes};

use crate::{AssignStmt, Expr, ExternStmt, Module, Stmt};

/// Parse result.
pub struct ParseResult {
    pub module: Module,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of parsing a single expression (REPL input).
pub struct ExprParseResult {
    pub expr: Expr,
    pub diagnostics: Vec<Diagnostic>,
}

/// marl parser.
pub struct Parser<'a> {
    pub input: &'a str,
    pub tokens: &'a [Token],
    pub i: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(input: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            input,
            tokens,
            i: 0,
            diagnostics: Vec::with_capacity(8),
        }
    }

    /// Parse the full input and return a module plus diagnostics.
    pub fn parse(mut self) -> ParseResult {
        let stmts = self.parse_stmts_until(TokenKind::Eof);
        ParseResult {
            module: Module { stmts },
            diagnostics: self.diagnostics,
        }
    }

    /// Parse a single expression spanning the whole input (REPL lines).
    pub fn parse_expr_entry(mut self) -> ExprParseResult {
        let expr = match self.parse_expr() {
            Some(e) => e,
            None => Expr::Error(self.cur_span()),
        };
        if !self.at(TokenKind::Eof) {
            let span = self.cur_span();
            self.diagnostics.push(
                Diagnostic::error_kind(DiagnosticKind::TrailingTokens, Some(span))
                    .with_code(codes::PARSE_ERROR),
            );
        }
        ExprParseResult {
            expr,
            diagnostics: self.diagnostics,
        }
    }

    pub(crate) fn parse_stmts_until(&mut self, end: TokenKind) -> Box<[Stmt]> {
        let mut stmts: Vec<Stmt> = Vec::with_capacity(8);
        while !self.at(end) && !self.at(TokenKind::Eof) {
            match self.parse_stmt() {
                Some(s) => stmts.push(s),
                None => stmts.push(self.recover_stmt(end)),
            }
        }
        stmts.into_boxed_slice()
    }

    fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.peek_kind() {
            TokenKind::ColonColon => {
                self.bump();
                let start = self.cur_span();
                let expr = self.parse_expr()?;
                let span = start.merge(self.prev_span());
                Some(Stmt::Extern(Box::new(ExternStmt { expr, span })))
            }
            TokenKind::Ident => {
                let name_tok = self.bumped();
                let name = self.token_text(&name_tok).to_string();
                self.expect(TokenKind::Eq)?;
                let value = self.parse_expr()?;
                Some(Stmt::Assign(Box::new(AssignStmt {
                    name,
                    name_span: name_tok.span,
                    value,
                })))
            }
            _ => {
                let span = self.cur_span();
                self.diagnostics.push(
                    Diagnostic::error_kind(DiagnosticKind::ExpectedStatement, Some(span))
                        .with_code(codes::PARSE_ERROR),
                );
                None
            }
        }
    }

    /// Skip to the next plausible statement start (or the enclosing block's
    /// `end` token), tracking delimiter nesting so recovery does not stop
    /// inside a nested form. Always consumes at least one token so the
    /// statement loop makes progress.
    pub(crate) fn recover_stmt(&mut self, end: TokenKind) -> Stmt {
        let start = self.cur_span();
        let mut depth: u32 = 0;
        let mut consumed = false;
        while !self.at(TokenKind::Eof) {
            let kind = self.peek_kind();
            if consumed && depth == 0 {
                let at_stmt_start = kind == TokenKind::ColonColon
                    || (kind == TokenKind::Ident
                        && self.peek_kind_n(1) == Some(TokenKind::Eq));
                if kind == end || at_stmt_start {
                    break;
                }
            }
            match kind {
                TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                    if depth == 0 {
                        if consumed {
                            break;
                        }
                        // Stray closer: swallow it and keep scanning.
                    } else {
                        depth -= 1;
                    }
                }
                _ => {}
            }
            self.bump();
            consumed = true;
        }
        Stmt::Error(Span::new(start.start.0, self.cur_span().start.0))
    }

    pub(crate) fn expect_ident(&mut self) -> Option<(String, Span)> {
        if self.peek_kind().is_keyword() {
            let t = self.bumped();
            let kw = self.token_text(&t).to_string();
            self.diagnostics.push(
                Diagnostic::error_kind(DiagnosticKind::KeywordAsIdentifier(kw), Some(t.span))
                    .with_code(codes::PARSE_ERROR),
            );
            return None;
        }
        let t = self.expect(TokenKind::Ident)?;
        Some((self.token_text(&t).to_string(), t.span))
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            return Some(self.bumped());
        }
        let span = self.cur_span();
        self.diagnostics.push(
            Diagnostic::error_kind(
                DiagnosticKind::ExpectedToken(kind.describe().to_string()),
                Some(span),
            )
            .with_code(codes::PARSE_ERROR),
        );
        None
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.i)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.i + n).map(|t| t.kind)
    }

    pub(crate) fn bumped(&mut self) -> Token {
        let t = self.tokens[self.i].clone();
        self.i += 1;
        t
    }

    pub(crate) fn bump(&mut self) {
        self.i += 1;
    }

    pub(crate) fn cur_span(&self) -> Span {
        self.tokens
            .get(self.i)
            .map(|t| t.span)
            .unwrap_or_else(|| Span::new(self.input.len() as u32, self.input.len() as u32))
    }

    /// Span of the last consumed token. Only meaningful after at least one
    /// `bump`; callers use it to close spans that end on the previous token.
    pub(crate) fn prev_span(&self) -> Span {
        if self.i == 0 {
            return self.cur_span();
        }
        self.tokens[self.i - 1].span
    }

    pub(crate) fn token_text(&self, t: &Token) -> &str {
        &self.input[t.span.start.0 as usize..t.span.end.0 as usize]
    }
}
