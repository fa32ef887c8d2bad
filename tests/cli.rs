use std::{
    env, fs,
    path::PathBuf,
    process::{Command, Output},
};

fn source_file(name: &str, source: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("arrow-cli-{}-{name}.ar", std::process::id()));
    fs::write(&path, source).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
    path
}

fn arrow(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arrow")).args(args)
                                             .env_remove("RUST_LOG")
                                             .output()
                                             .expect("failed to start the arrow binary")
}

fn run_file(name: &str, source: &str, flags: &[&str]) -> Output {
    let path = source_file(name, source);
    let mut args = flags.to_vec();
    args.push(path.to_str().unwrap());
    let output = arrow(&args);
    let _ = fs::remove_file(&path);
    output
}

#[test]
fn printed_values_go_to_stdout() {
    let output = run_file("hello", "\"hello world\" > v; v > @print;", &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello world\n");
}

#[test]
fn notices_do_not_fail_the_run() {
    let output = run_file("unmatched", "{\"x\"=>\"1\">@print;}>actor; \"y\">@actor;", &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No pattern of '@actor' matches \"y\""));
}

#[test]
fn syntax_errors_fail_with_a_report() {
    let output = run_file("unclosed", "\"a\" > @print;\n  { \"x\" > y;\n", &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.starts_with("error[E0002]: Unterminated block literal, missing '}'.\n"));
    assert!(stderr.contains(":2:3\n"));
    assert!(stderr.contains(" 2 |   { \"x\" > y;\n   |   ^\n"));
}

#[test]
fn missing_files_fail() {
    let output = arrow(&["/nonexistent/arrow/program.ar"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}

#[test]
fn ast_flag_prints_the_canonical_program() {
    let output = run_file("ast", "{\"k\"=>\"v\">@print;}>a;", &["--ast"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "{\n    \"k\" => \"v\" > @print;\n} > a;\n");
}
