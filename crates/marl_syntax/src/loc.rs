pub enum DiagnosticKind {
    // Lexer
    TabNotAllowed,
    FullWidthSpaceNotAllowed,
    UnterminatedString,
    UnexpectedChar(char),
    UnclosedDelimiter(char),
    UnmatchedDelimiter(char),
    BareSign(char),

    // Parser
    ExpectedToken(String),
    ExpectedExpression,
    ExpectedStatement,
    EmptySwitch,
    KeywordAsIdentifier(String),
    TrailingTokens,

    // Analyzer
    Redefinition(String),
    UseBeforeDefinition(String),
    DidYouMean(String),

    // Custom
    Raw(String),
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    fn format_en(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::TabNotAllowed => "Tab is not allowed; use ASCII spaces".into(),
            DiagnosticKind::FullWidthSpaceNotAllowed => {
                "Full-width space is not allowed; use ASCII spaces".into()
            }
            DiagnosticKind::UnterminatedString => "Unterminated string literal".into(),
            DiagnosticKind::UnexpectedChar(c) => format!("Unexpected character: {}", c),
            DiagnosticKind::UnclosedDelimiter(c) => format!("Unclosed '{}'", c),
            DiagnosticKind::UnmatchedDelimiter(c) => format!("Unmatched '{}'", c),
            DiagnosticKind::BareSign(c) => {
                format!("'{}' must be followed by a digit to form a signed number", c)
            }
            DiagnosticKind::ExpectedToken(s) => format!("Expected {}", s),
            DiagnosticKind::ExpectedExpression => "Expected expression".into(),
            DiagnosticKind::ExpectedStatement => {
                "Expected an assignment or an extern ('::') statement".into()
            }
            DiagnosticKind::EmptySwitch => "A switch needs at least one case".into(),
            DiagnosticKind::KeywordAsIdentifier(kw) => {
                format!("Keyword '{}' cannot be used as an identifier", kw)
            }
            DiagnosticKind::TrailingTokens => "Trailing tokens after expression".into(),

            DiagnosticKind::Redefinition(name) => {
                format!("'{}' is assigned more than once in this block; the last value wins", name)
            }
            DiagnosticKind::UseBeforeDefinition(name) => {
                format!("'{}' is used before it is assigned in this block", name)
            }
            DiagnosticKind::DidYouMean(s) => format!("Did you mean '{}'?", s),

            DiagnosticKind::Raw(s) => s.clone(),
        }
    }

    pub fn format(kind: &DiagnosticKind) -> String {
        Self::format_en(kind)
    }
}
