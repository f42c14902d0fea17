use marl_syntax::{Diagnostic, DiagnosticKind, Span, codes};

pub struct NormalizedSource {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Normalize line endings and reject non-ASCII whitespace before lexing.
/// Offsets in the returned text are what every later span refers to.
pub fn normalize_source(input: &str) -> NormalizedSource {
    let mut diagnostics = Vec::new();

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\t' => {
                let start = out.len() as u32;
                diagnostics.push(
                    Diagnostic::error_kind(
                        DiagnosticKind::TabNotAllowed,
                        Some(Span::new(start, start.saturating_add(1))),
                    )
                    .with_code(codes::UNEXPECTED_CHAR),
                );
                out.push(' ');
            }
            '\u{3000}' => {
                let start = out.len() as u32;
                diagnostics.push(
                    Diagnostic::error_kind(
                        DiagnosticKind::FullWidthSpaceNotAllowed,
                        Some(Span::new(start, start.saturating_add(1))),
                    )
                    .with_code(codes::UNEXPECTED_CHAR),
                );
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    NormalizedSource {
        text: out,
        diagnostics,
    }
}
