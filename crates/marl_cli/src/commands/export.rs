use std::io::Write;

use marl_driver::Driver;
use marl_runtime::{Runtime, export_string, export_string_pretty};

use crate::args::CliArgs;
use crate::commands::common::{has_errors, print_timings, require_file};
use crate::commands::emit_diagnostics;

pub(crate) fn export(args: &CliArgs, driver: &Driver) {
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

    // Trace/echo output still belongs to the terminal, even when the JSON
    // itself goes to a file.
    let output = rt.take_output();
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{output}");

    let value = match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match &args.out_path {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, export_string(&value)) {
                eprintln!("Failed to write {out_path}: {e}");
                std::process::exit(2);
            }
        }
        None => {
            let _ = writeln!(stdout, "{}", export_string_pretty(&value));
        }
    }
}
