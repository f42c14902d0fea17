use marl_syntax::{Diagnostic, Severity, SourceFile, render_diagnostic};
use serde_json::json;

pub(crate) mod ast;
pub(crate) mod check;
pub(crate) mod common;
pub(crate) mod export;
pub(crate) mod repl;
pub(crate) mod run;
pub(crate) mod tokens;

/// Human-readable diagnostics go to stderr; `--json` emits one object per
/// line on stdout instead.
pub(crate) fn emit_diagnostics(source: &SourceFile, diagnostics: &[Diagnostic], json_out: bool) {
    for d in diagnostics {
        if json_out {
            let span = d.span.map(|s| json!({ "start": s.start.0, "end": s.end.0 }));
            let obj = json!({
                "severity": match d.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                },
                "code": d.code,
                "message": d.message,
                "span": span,
                "file": source.name,
            });
            println!("{obj}");
        } else {
            eprintln!("{}", render_diagnostic(source, d));
        }
    }
}
