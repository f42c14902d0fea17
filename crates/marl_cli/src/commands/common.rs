use marl_driver::Timings;
use marl_syntax::Diagnostic;

use crate::args::CliArgs;

pub(crate) fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.is_error())
}

pub(crate) fn require_file(args: &CliArgs) -> &str {
    match args.positional.first() {
        Some(path) => path.as_str(),
        None => {
            eprintln!("Missing <file>");
            std::process::exit(2);
        }
    }
}

pub(crate) fn print_timings(timings: &Timings) {
    println!(
        "TIMING normalize={:.3}ms lex={:.3}ms parse={:.3}ms lower={:.3}ms analyze={:.3}ms",
        (timings.normalize_us as f64) / 1000.0,
        (timings.lex_us as f64) / 1000.0,
        (timings.parse_us as f64) / 1000.0,
        (timings.lower_us as f64) / 1000.0,
        (timings.analyze_us as f64) / 1000.0,
    );
}
