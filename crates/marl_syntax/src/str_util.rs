/// Strip surrounding double quotes from a string token's text and
/// process its escapes. Text without surrounding quotes passes through.
pub fn unquote(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        let inner = &s[1..bytes.len() - 1];
        unescape(inner)
    } else {
        s.to_string()
    }
}

pub fn unescape(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => res.push('\n'),
                Some('r') => res.push('\r'),
                Some('t') => res.push('\t'),
                Some('\\') => res.push('\\'),
                Some('"') => res.push('"'),
                // Unknown escape: keep the backslash and character as written.
                Some(next) => {
                    res.push('\\');
                    res.push(next);
                }
                None => res.push('\\'),
            }
        } else {
            res.push(c);
        }
    }
    res
}

/// Inverse of `unquote`: wrap in double quotes, escaping as needed.
/// Used when rendering string values back into source-literal form.
pub fn quote(s: &str) -> String {
    let mut res = String::with_capacity(s.len() + 2);
    res.push('"');
    for c in s.chars() {
        match c {
            '\n' => res.push_str("\\n"),
            '\r' => res.push_str("\\r"),
            '\t' => res.push_str("\\t"),
            '\\' => res.push_str("\\\\"),
            '"' => res.push_str("\\\""),
            _ => res.push(c),
        }
    }
    res.push('"');
    res
}
