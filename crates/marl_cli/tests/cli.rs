//! End-to-end checks of the `marl` binary: exit codes, output layout, and
//! the REPL loop over piped stdin.

use std::process::Output;

use assert_cmd::Command;

fn marl(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("marl").expect("marl binary");
    cmd.args(args);
    cmd
}

fn run(args: &[&str]) -> Output {
    marl(args).output().expect("spawn marl")
}

fn write_module(dir: &tempfile::TempDir, name: &str, src: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, src).expect("write module");
    path.to_string_lossy().into_owned()
}

#[test]
fn usage_without_arguments_exits_2() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: marl"), "stderr was: {stderr}");
}

#[test]
fn unknown_command_exits_2() {
    let out = run(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown command"), "stderr was: {stderr}");
}

#[test]
fn unknown_option_exits_2() {
    let out = run(&["run", "--frob"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown option: --frob"), "stderr was: {stderr}");
}

#[test]
fn run_on_a_missing_file_exits_2() {
    let out = run(&["run", "/definitely/not/here.marl"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to read file"), "stderr was: {stderr}");
}

#[test]
fn run_streams_output_then_prints_the_data_banner() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(
        &dir,
        "m.marl",
        ":: builtins.trace(\"starting\")\nx = builtins.add(40, 2)\n",
    );
    let out = run(&["run", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let echo_at = stdout
        .find("builtins.trace(\"starting\")")
        .expect("extern echo");
    let trace_at = stdout.find("\nstarting\n").expect("trace line");
    let banner_at = stdout.find("======= DATA =======").expect("banner");
    assert!(
        echo_at < trace_at && trace_at < banner_at,
        "stdout was: {stdout}"
    );
    assert!(stdout.contains("x = 42"), "stdout was: {stdout}");
}

#[test]
fn run_rejects_a_module_with_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(&dir, "bad.marl", "x = = 1\n");
    let out = run(&["run", &path]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error"), "stderr was: {stderr}");
}

#[test]
fn run_prints_output_before_reporting_a_runtime_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(
        &dir,
        "m.marl",
        ":: builtins.trace(\"before\")\nboom = missing\n",
    );
    let out = run(&["run", &path]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("before"), "stdout was: {stdout}");
    assert!(
        !stdout.contains("======= DATA ======="),
        "stdout was: {stdout}"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("NameError: name 'missing' is not bound"),
        "stderr was: {stderr}"
    );
}

#[test]
fn check_reports_warnings_but_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(&dir, "m.marl", "x = 1\nx = 2\n");
    let out = run(&["check", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("assigned more than once"),
        "stderr was: {stderr}"
    );
}

#[test]
fn check_emits_json_diagnostics_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(&dir, "m.marl", "x = 1\nx = 2\n");
    let out = run(&["check", "--json", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let first = stdout.lines().next().expect("one diagnostic line");
    let parsed: serde_json::Value = serde_json::from_str(first).expect("json line");
    assert_eq!(parsed["severity"], "warning");
    assert_eq!(parsed["code"], "W0001");
    assert!(parsed["span"].is_object(), "line was: {first}");
}

#[test]
fn check_with_timings_prints_a_timing_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(&dir, "m.marl", "x = 1\n");
    let out = run(&["check", "--timings", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("TIMING normalize="), "stdout was: {stdout}");
}

#[test]
fn export_writes_pretty_json_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(
        &dir,
        "m.marl",
        "name = \"svc\"\nfeatures = [\"a\", \"b\"]\n_key = 9\nhook = fn -> 1 endfn\n",
    );
    let out = run(&["export", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(
        parsed,
        serde_json::json!({"name": "svc", "features": ["a", "b"], "_key": 9})
    );
    assert!(stdout.contains("\n  "), "expected indentation: {stdout}");
}

#[test]
fn export_writes_compact_json_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(
        &dir,
        "m.marl",
        "name = \"svc\"\nfeatures = [\"a\", \"b\"]\n_key = 9\nhook = fn -> 1 endfn\n",
    );
    let out_file = dir.path().join("out.json");
    let out = run(&["export", &path, "-o", &out_file.to_string_lossy()]);
    assert_eq!(out.status.code(), Some(0));
    let contents = std::fs::read_to_string(&out_file).expect("exported file");
    assert_eq!(contents, r#"{"name":"svc","features":["a","b"],"_key":9}"#);
}

#[test]
fn tokens_dumps_the_token_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(&dir, "m.marl", "x = 1\n");
    let out = run(&["tokens", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Ident"), "stdout was: {stdout}");
    assert!(stdout.contains("Int"), "stdout was: {stdout}");
    assert!(stdout.contains("Eof"), "stdout was: {stdout}");
}

#[test]
fn ast_dumps_the_parsed_module() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_module(&dir, "m.marl", "x = [1, 2]\n");
    let out = run(&["ast", &path]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Assign"), "stdout was: {stdout}");
    assert!(stdout.contains("List"), "stdout was: {stdout}");
}

#[test]
fn repl_evaluates_lines_against_one_session() {
    let out = marl(&["repl"])
        .write_stdin("x = 21\nbuiltins.mul(x, 2)\n:q\n")
        .output()
        .expect("spawn marl");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("marl> "), "stdout was: {stdout}");
    assert!(stdout.contains("42"), "stdout was: {stdout}");
}

#[test]
fn repl_reports_errors_without_dying() {
    let out = marl(&["repl"])
        .write_stdin("nope\nbuiltins.concat(\"still \", \"here\")\n:quit\n")
        .output()
        .expect("spawn marl");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"still here\""), "stdout was: {stdout}");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("NameError: name 'nope' is not bound"),
        "stderr was: {stderr}"
    );
}
