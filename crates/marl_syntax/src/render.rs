use crate::{Diagnostic, SourceFile};

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

struct Excerpt<'a> {
    line: u32,
    col: u32,
    text: &'a str,
}

fn excerpt_at(source: &SourceFile, byte: u32) -> Excerpt<'_> {
    let text = source.text.as_str();
    let start = floor_char_boundary(text, byte as usize);
    let (line, col) = source.text.line_col(start as u32);
    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[start..]
        .find('\n')
        .map(|i| start + i)
        .unwrap_or(text.len());
    Excerpt {
        line,
        col,
        text: &text[line_start..line_end],
    }
}

fn push_caret_line(out: &mut String, indent: &str, ex: &Excerpt) {
    out.push('\n');
    out.push_str(indent);
    out.push_str(ex.text);
    out.push('\n');
    out.push_str(indent);
    out.extend(std::iter::repeat_n(' ', ex.col as usize));
    out.push('^');
}

/// Render one diagnostic against its source in the fixed
/// `Severity:line:col: name: message` + caret-underline layout.
pub fn render_diagnostic(source: &SourceFile, diag: &Diagnostic) -> String {
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    let mut out = String::new();

    match diag.span {
        Some(span) => {
            let ex = excerpt_at(source, span.start.0);
            out.push_str(&format!(
                "{:?}{}:{}:{}: {}: {}",
                diag.severity,
                code_str,
                ex.line + 1,
                ex.col + 1,
                source.name,
                diag.message
            ));
            push_caret_line(&mut out, "  | ", &ex);
        }
        None => {
            out.push_str(&format!(
                "{:?}{}: {}: {}",
                diag.severity, code_str, source.name, diag.message
            ));
        }
    }

    if let Some(s) = &diag.suggestion {
        out.push('\n');
        out.push_str("  = suggestion: ");
        out.push_str(s);
    }
    for label in &diag.labels {
        let ex = excerpt_at(source, label.span.start.0);
        out.push('\n');
        out.push_str("  = note: ");
        out.push_str(&label.message);
        push_caret_line(&mut out, "    | ", &ex);
        out.push_str(&format!("  ({}:{}:{})", source.name, ex.line + 1, ex.col + 1));
    }
    if let Some(h) = &diag.help {
        out.push('\n');
        out.push_str("  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for (idx, d) in diagnostics.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&render_diagnostic(source, d));
    }
    out
}
