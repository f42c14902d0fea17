use std::io::Write;

use marl_driver::Driver;
use marl_runtime::{Runtime, value_to_literal};

use crate::args::CliArgs;
use crate::commands::common::{has_errors, print_timings, require_file};
use crate::commands::emit_diagnostics;

pub(crate) fn run(args: &CliArgs, driver: &Driver) {
    let path = require_file(args);
    let compiled = match driver.compile_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    emit_diagnostics(&compiled.source, &compiled.diagnostics, args.json_out);
    if has_errors(&compiled.diagnostics) {
        std::process::exit(1);
    }
    if args.timings {
        print_timings(&compiled.timings);
    }

    let mut rt = Runtime::new();
    let result = rt.load_module(&compiled.program);
    let output = rt.take_output();

    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{output}");

    match result {
        Ok(value) => {
            let _ = writeln!(stdout, "\n======= DATA =======");
            let _ = writeln!(stdout, "{}", value_to_literal(&value));
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
