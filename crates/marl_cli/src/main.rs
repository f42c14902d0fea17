//! `marl`: compile, run, and export configuration modules.

#[cfg(not(target_env = "msvc"))]
use mimalloc::MiMalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod commands;

use marl_driver::Driver;

fn main() {
    let args = match args::parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let driver = Driver::new();
    match args.cmd.as_str() {
        "tokens" => commands::tokens::tokens(&args, &driver),
        "ast" => commands::ast::ast(&args, &driver),
        "check" => commands::check::check(&args, &driver),
        "run" => commands::run::run(&args, &driver),
        "export" => commands::export::export(&args, &driver),
        "repl" => commands::repl::repl(&args, &driver),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!("{}", args::usage());
            std::process::exit(2);
        }
    }
}
