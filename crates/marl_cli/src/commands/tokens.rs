use std::io::Write;

use marl_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::require_file;

pub(crate) fn tokens(args: &CliArgs, driver: &Driver) {
    let path = require_file(args);
    let lexed = match driver.lex_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let mut out = std::io::stdout().lock();
    for token in &lexed.tokens {
        let text = lexed.source.text.slice(token.span);
        if let Err(e) = writeln!(
            out,
            "{:?}\t{:?}\t{}",
            token.kind,
            token.span,
            escape_visible(text)
        ) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                return;
            }
            eprintln!("stdout error: {e}");
            std::process::exit(2);
        }
    }
}

fn escape_visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
