//! Lexer implementation.
//!
//! Scans source text into tokens (keywords/idents/literals/delimiters) and
//! collects diagnostics. Whitespace and `#` comments are insignificant and
//! never produce tokens.
//!
//! Design: single linear pass, delimiter stack for matching diagnostics,
//! minimal allocations. Signs are part of number literals (`-3`, `+0.5`);
//! the only other lexeme starting with `-` is `->`.
//!
//! Related: `LexResult`, `marl_syntax` (tokens/diagnostics).
use crate::keywords::KEYWORDS;
use marl_syntax::{
    Diagnostic, DiagnosticKind, Span, Token, TokenKind, codes, is_ident_continue, is_ident_start,
};

/// Lexing result.
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// marl lexer.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    i: usize,
    diagnostics: Vec<Diagnostic>,
    tokens: Vec<Token>,
    delim_stack: Vec<(char, usize)>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            i: 0,
            diagnostics: Vec::new(),
            tokens: Vec::new(),
            delim_stack: Vec::new(),
        }
    }

    /// Run the lexer and return tokens + diagnostics. The token stream
    /// always ends with `Eof`, regardless of diagnostics.
    pub fn lex(mut self) -> LexResult {
        let approx = self.bytes.len().saturating_div(4).max(32);
        self.tokens.reserve(approx);
        while self.i < self.bytes.len() {
            let start = self.i;
            let c = self.peek_char();

            match c {
                Some(' ') | Some('\n') | Some('\r') => {
                    self.i += 1;
                }
                Some('\t') => {
                    self.i += 1;
                    self.diagnostics.push(
                        Diagnostic::error_kind(
                            DiagnosticKind::TabNotAllowed,
                            Some(Span::new(start as u32, self.i as u32)),
                        )
                        .with_code(codes::UNEXPECTED_CHAR),
                    );
                }
                Some('\u{3000}') => {
                    self.i += '\u{3000}'.len_utf8();
                    self.diagnostics.push(
                        Diagnostic::error_kind(
                            DiagnosticKind::FullWidthSpaceNotAllowed,
                            Some(Span::new(start as u32, self.i as u32)),
                        )
                        .with_code(codes::UNEXPECTED_CHAR),
                    );
                }
                Some('#') => {
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' {
                            break;
                        }
                        self.i += ch.len_utf8();
                    }
                }
                Some(':') => {
                    self.i += 1;
                    if self.peek_char() == Some(':') {
                        self.i += 1;
                        self.push(TokenKind::ColonColon, start);
                    } else {
                        self.diagnostics.push(
                            Diagnostic::error_kind(
                                DiagnosticKind::UnexpectedChar(':'),
                                Some(Span::new(start as u32, self.i as u32)),
                            )
                            .with_code(codes::UNEXPECTED_CHAR)
                            .with_help("extern statements start with '::'"),
                        );
                    }
                }
                Some('-') | Some('+') => {
                    let sign = c.unwrap();
                    self.i += 1;
                    if sign == '-' && self.peek_char() == Some('>') {
                        self.i += 1;
                        self.push(TokenKind::Arrow, start);
                    } else if self.at_number_start() {
                        self.lex_number(start);
                    } else {
                        self.diagnostics.push(
                            Diagnostic::error_kind(
                                DiagnosticKind::BareSign(sign),
                                Some(Span::new(start as u32, self.i as u32)),
                            )
                            .with_code(codes::UNEXPECTED_CHAR),
                        );
                    }
                }
                Some('=') => {
                    self.i += 1;
                    self.push(TokenKind::Eq, start);
                }
                Some('.') => {
                    if self.peek_digit_at(1) {
                        self.lex_number(start);
                    } else {
                        self.i += 1;
                        self.push(TokenKind::Dot, start);
                    }
                }
                Some(',') => {
                    self.i += 1;
                    self.push(TokenKind::Comma, start);
                }
                Some(';') => {
                    self.i += 1;
                    self.push(TokenKind::Semi, start);
                }
                Some('(') => self.open_delim('(', TokenKind::LParen),
                Some(')') => self.close_delim('(', ')', TokenKind::RParen),
                Some('{') => self.open_delim('{', TokenKind::LBrace),
                Some('}') => self.close_delim('{', '}', TokenKind::RBrace),
                Some('[') => self.open_delim('[', TokenKind::LBracket),
                Some(']') => self.close_delim('[', ']', TokenKind::RBracket),
                Some('"') => self.lex_string(),
                Some(ch) if ch.is_ascii_digit() => self.lex_number(start),
                Some(ch) if is_ident_start(ch) => self.lex_ident_or_keyword(),
                Some(other) => {
                    self.i += other.len_utf8();
                    self.diagnostics.push(
                        Diagnostic::error_kind(
                            DiagnosticKind::UnexpectedChar(other),
                            Some(Span::new(start as u32, self.i as u32)),
                        )
                        .with_code(codes::UNEXPECTED_CHAR),
                    );
                }
                None => break,
            }
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(self.i as u32, self.i as u32),
        });
        for (ch, at) in self.delim_stack.iter().rev() {
            self.diagnostics.push(
                Diagnostic::error_kind(
                    DiagnosticKind::UnclosedDelimiter(*ch),
                    Some(Span::new(*at as u32, *at as u32 + 1)),
                )
                .with_code(codes::UNCLOSED_DELIMITER),
            );
        }

        LexResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start as u32, self.i as u32),
        });
    }

    fn open_delim(&mut self, open: char, kind: TokenKind) {
        let start = self.i;
        self.i += 1;
        self.delim_stack.push((open, start));
        self.push(kind, start);
    }

    fn close_delim(&mut self, open: char, close: char, kind: TokenKind) {
        let start = self.i;
        self.i += 1;
        match self.delim_stack.pop() {
            Some((top, _)) if top == open => {}
            _ => {
                self.diagnostics.push(
                    Diagnostic::error_kind(
                        DiagnosticKind::UnmatchedDelimiter(close),
                        Some(Span::new(start as u32, self.i as u32)),
                    )
                    .with_code(codes::UNCLOSED_DELIMITER),
                );
            }
        }
        self.push(kind, start);
    }

    fn lex_string(&mut self) {
        let start = self.i;
        self.i += 1;
        while self.i < self.bytes.len() {
            let ch = self.peek_char().unwrap();
            if ch == '\n' || ch == '\r' {
                break;
            }
            if ch == '"' {
                self.i += 1;
                self.push(TokenKind::Str, start);
                return;
            }
            if ch == '\\' {
                self.i += 1;
                if self.i >= self.bytes.len() {
                    break;
                }
                let esc = self.peek_char().unwrap();
                self.i += esc.len_utf8();
                continue;
            }
            self.i += ch.len_utf8();
        }
        self.diagnostics.push(
            Diagnostic::error_kind(
                DiagnosticKind::UnterminatedString,
                Some(Span::new(start as u32, self.i as u32)),
            )
            .with_code(codes::UNTERMINATED_STRING),
        );
    }

    /// Lex the unsigned tail of a number. `start` is the token start,
    /// which may lie before an already-consumed sign.
    fn lex_number(&mut self, start: usize) {
        while self.i < self.bytes.len() {
            let ch = self.peek_char().unwrap();
            if ch.is_ascii_digit() {
                self.i += 1;
            } else {
                break;
            }
        }

        let mut kind = TokenKind::Int;
        if self.peek_char() == Some('.') {
            let dot = self.i;
            self.i += 1;
            let mut digits = 0usize;
            while self.i < self.bytes.len() {
                let ch = self.peek_char().unwrap();
                if ch.is_ascii_digit() {
                    self.i += 1;
                    digits += 1;
                    continue;
                }
                break;
            }
            if digits > 0 {
                kind = TokenKind::Float;
            } else {
                // `1.x` is attribute access on `1`; give the dot back.
                self.i = dot;
            }
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            let exp_start = self.i;
            self.i += 1;
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.i += 1;
            }
            let mut digits = 0usize;
            while self.i < self.bytes.len() {
                let ch = self.peek_char().unwrap();
                if ch.is_ascii_digit() {
                    self.i += 1;
                    digits += 1;
                    continue;
                }
                break;
            }
            if digits > 0 {
                kind = TokenKind::Float;
            } else {
                // `2e` is an ident suffix, not an exponent; back off.
                self.i = exp_start;
            }
        }

        self.push(kind, start);
    }

    fn lex_ident_or_keyword(&mut self) {
        let start = self.i;
        self.i += self.peek_char().unwrap().len_utf8();
        while self.i < self.bytes.len() {
            let ch = self.peek_char().unwrap();
            if is_ident_continue(ch) {
                self.i += ch.len_utf8();
            } else {
                break;
            }
        }

        let s = &self.input[start..self.i];
        let kind = KEYWORDS.get(s).cloned().unwrap_or(TokenKind::Ident);

        self.push(kind, start);
    }

    fn at_number_start(&self) -> bool {
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('.') => self.peek_digit_at(1),
            _ => false,
        }
    }

    fn peek_digit_at(&self, offset: usize) -> bool {
        self.bytes
            .get(self.i + offset)
            .is_some_and(|b| b.is_ascii_digit())
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.i..].chars().next()
    }
}
