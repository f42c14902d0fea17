//!
//!
mod builtins;
mod diagnostic;
mod loc;
mod render;
mod source;
mod span;
mod str_util;
mod token;
mod util;

pub use builtins::{ROOT_BINDINGS, is_root_binding};
pub use diagnostic::{Diagnostic, Label, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_diagnostic, render_diagnostics};
pub use source::{SourceFile, SourceId, SourceText};
pub use span::{ByteIndex, Span};
pub use str_util::{quote, unescape, unquote};
pub use token::{Token, TokenKind};
pub use util::{find_best_match, is_ident_continue, is_ident_start, levenshtein_distance};
