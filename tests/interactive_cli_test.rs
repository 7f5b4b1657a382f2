use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_with_input(args: &[&str], input: &str) -> Output {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_opcalc"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn opcalc");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_default_command_is_interactive() {
    let output = run_with_input(&[], "2\n+\n3\n");
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Supported operators: [+, -, *, /, ^, %]"));
    assert!(out.contains("Enter first number: "));
    assert!(out.contains("Enter operator: "));
    assert!(out.contains("Enter second number: "));
    assert!(out.ends_with("Result: 5.0\n"));
}

#[test]
fn test_piped_banner_has_no_escape_codes() {
    let output = run_with_input(&[], "2\n+\n3\n");
    let out = stdout(&output);
    assert!(out.starts_with("===== Operator Calculator =====\n"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_interactive_subcommand() {
    let output = run_with_input(&["interactive"], "6\n*\n7\n");
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Result: 42.0\n"));
}

#[test]
fn test_interactive_failures_do_not_crash() {
    let cases = [
        ("abc\n+\n1\n", "Invalid number entered.\n"),
        ("10\n/\n0\n", "Math error: Division by zero is not allowed.\n"),
        ("1\n@\n1\n", "Unexpected error: Unsupported operator: @\n"),
        ("1\n", "Unexpected error: No line found\n"),
    ];

    for (input, expected) in cases {
        let output = run_with_input(&[], input);
        assert_eq!(output.status.code(), Some(1), "{input:?}");
        assert!(
            stdout(&output).ends_with(expected),
            "{input:?} printed {:?}",
            stdout(&output)
        );
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(!stderr.contains("panicked"), "{stderr}");
    }
}
