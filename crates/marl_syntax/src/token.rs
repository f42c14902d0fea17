//! Token definitions.
//!
//! marl has a deliberately small token set: identifiers, string/number
//! literals, a handful of delimiters, and the keywords of the four
//! compound forms (conditional, switch, function, record).
use crate::Span;

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier.
    Ident,
    /// Integer literal.
    Int,
    /// Float literal.
    Float,
    /// String literal (still quoted; see `unquote`).
    Str,

    /// `::` (extern statement marker).
    ColonColon,
    /// `=`
    Eq,
    /// `->`
    Arrow,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// `if`
    KwIf,
    /// `then`
    KwThen,
    /// `else`
    KwElse,
    /// `endif`
    KwEndif,
    /// `switch`
    KwSwitch,
    /// `of`
    KwOf,
    /// `end`
    KwEnd,
    /// `fn`
    KwFn,
    /// `endfn`
    KwEndfn,

    /// End of file.
    Eof,
}

impl TokenKind {
    /// Human-readable name used in "expected ..." diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident => "an identifier",
            TokenKind::Int => "an integer literal",
            TokenKind::Float => "a float literal",
            TokenKind::Str => "a string literal",
            TokenKind::ColonColon => "'::'",
            TokenKind::Eq => "'='",
            TokenKind::Arrow => "'->'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Semi => "';'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwThen => "'then'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwEndif => "'endif'",
            TokenKind::KwSwitch => "'switch'",
            TokenKind::KwOf => "'of'",
            TokenKind::KwEnd => "'end'",
            TokenKind::KwFn => "'fn'",
            TokenKind::KwEndfn => "'endfn'",
            TokenKind::Eof => "end of file",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwIf
                | TokenKind::KwThen
                | TokenKind::KwElse
                | TokenKind::KwEndif
                | TokenKind::KwSwitch
                | TokenKind::KwOf
                | TokenKind::KwEnd
                | TokenKind::KwFn
                | TokenKind::KwEndfn
        )
    }
}

/// Token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Span in source text.
    pub span: Span,
}
