use std::io::{BufRead, Write};

use marl_driver::Driver;
use marl_runtime::{Runtime, RuntimeConfig, value_to_literal};
use marl_syntax::TokenKind;

use crate::args::CliArgs;
use crate::commands::common::has_errors;
use crate::commands::emit_diagnostics;

const HELP: &str = "\
Enter `name = expr` to bind into the session, or an expression to evaluate.
Commands: :help (:h), :quit (:q)";

pub(crate) fn repl(args: &CliArgs, driver: &Driver) {
    // Echoing an extern line straight back at the terminal is noise.
    let mut rt = Runtime::with_config(RuntimeConfig {
        echo_externs: false,
    });
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("marl> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("stdin error: {e}");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" || line == ":q" {
            break;
        }
        if line == ":help" || line == ":h" {
            println!("{HELP}");
            continue;
        }
        eval_line(&mut rt, driver, args, line);
    }
}

fn eval_line(rt: &mut Runtime, driver: &Driver, args: &CliArgs, line: &str) {
    if is_statement(driver, line) {
        let compiled = driver.compile_text_no_analyze("<repl>", line);
        emit_diagnostics(&compiled.source, &compiled.diagnostics, args.json_out);
        if has_errors(&compiled.diagnostics) {
            return;
        }
        let result = rt.exec_session(&compiled.program.stmts);
        print!("{}", rt.take_output());
        if let Err(e) = result {
            eprintln!("{e}");
        }
    } else {
        let compiled = driver.compile_expr_text("<repl>", line);
        emit_diagnostics(&compiled.source, &compiled.diagnostics, args.json_out);
        if has_errors(&compiled.diagnostics) {
            return;
        }
        let result = rt.eval_expr(&compiled.thunk);
        print!("{}", rt.take_output());
        match result {
            Ok(value) => println!("{}", value_to_literal(&value)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// A line is a statement when it opens with `::` or looks like a top-level
/// `name = ...` assignment; everything else evaluates as an expression.
fn is_statement(driver: &Driver, line: &str) -> bool {
    let lexed = driver.lex_text("<repl>", line);
    let kinds: Vec<TokenKind> = lexed.tokens.iter().map(|t| t.kind).collect();
    matches!(
        kinds.as_slice(),
        [TokenKind::ColonColon, ..] | [TokenKind::Ident, TokenKind::Eq, ..]
    )
}
