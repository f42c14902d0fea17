pub(crate) struct CliArgs {
    pub cmd: String,
    pub json_out: bool,
    pub timings: bool,
    pub out_path: Option<String>,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: marl <tokens|ast|check|run|export|repl> [--json] [--timings] [-o <file>] <args>"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    let cmd = argv.first().cloned().ok_or_else(|| usage().to_string())?;
    argv.remove(0);

    let mut json_out = false;
    let mut timings = false;
    let mut out_path = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < argv.len() {
        let a = argv[i].as_str();
        if a == "--json" {
            json_out = true;
        } else if a == "--timings" {
            timings = true;
        } else if a == "-o" {
            i += 1;
            let Some(path) = argv.get(i) else {
                return Err("-o needs a file argument".to_string());
            };
            out_path = Some(path.clone());
        } else if a.starts_with('-') {
            return Err(format!("Unknown option: {a}"));
        } else {
            positional.push(argv[i].clone());
        }
        i += 1;
    }

    Ok(CliArgs {
        cmd,
        json_out,
        timings,
        out_path,
        positional,
    })
}
