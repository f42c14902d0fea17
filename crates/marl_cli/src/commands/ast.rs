use std::io::Write;

use marl_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::{has_errors, print_timings, require_file};
use crate::commands::emit_diagnostics;

pub(crate) fn ast(args: &CliArgs, driver: &Driver) {
    let path = require_file(args);
    let parsed = match driver.parse_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    emit_diagnostics(&parsed.source, &parsed.diagnostics, args.json_out);
    if has_errors(&parsed.diagnostics) {
        std::process::exit(1);
    }
    if args.timings {
        print_timings(&parsed.timings);
    }
    let mut out = std::io::stdout().lock();
    if let Err(e) = writeln!(out, "{:#?}", parsed.module) {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("stdout error: {e}");
        std::process::exit(2);
    }
}
