//! Static keyword table.
use marl_syntax::TokenKind;

pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "if" => TokenKind::KwIf,
    "then" => TokenKind::KwThen,
    "else" => TokenKind::KwElse,
    "endif" => TokenKind::KwEndif,
    "switch" => TokenKind::KwSwitch,
    "of" => TokenKind::KwOf,
    "end" => TokenKind::KwEnd,
    "fn" => TokenKind::KwFn,
    "endfn" => TokenKind::KwEndfn,
};
