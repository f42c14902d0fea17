use marl_driver::Driver;

use crate::args::CliArgs;
use crate::commands::common::{has_errors, print_timings, require_file};
use crate::commands::emit_diagnostics;

pub(crate) fn check(args: &CliArgs, driver: &Driver) {
    let path = require_file(args);
    let compiled = match driver.compile_file(path) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    emit_diagnostics(&compiled.source, &compiled.diagnostics, args.json_out);
    if args.timings {
        print_timings(&compiled.timings);
    }
    if has_errors(&compiled.diagnostics) {
        std::process::exit(1);
    }
}
