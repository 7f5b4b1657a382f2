use std::process::{Command, Output};
use tempfile::TempDir;

fn eval(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_opcalc"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("eval")
        .args(args)
        .output()
        .expect("Failed to run eval command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_eval_builtins() {
    let dir = TempDir::new().unwrap();
    let cases = [
        (["2", "+", "3"], "5.0"),
        (["10", "-", "4"], "6.0"),
        (["6", "*", "7"], "42.0"),
        (["2", "^", "10"], "1024.0"),
        (["10", "%", "3"], "1.0"),
        (["7", "/", "2"], "3.5"),
    ];

    for (args, expected) in cases {
        let output = eval(&dir, &args);
        assert!(output.status.success(), "{args:?} failed: {}", stderr(&output));
        assert_eq!(stdout(&output), format!("{expected}\n"), "{args:?}");
    }
}

#[test]
fn test_eval_large_and_tiny_results_are_plain_decimal() {
    let dir = TempDir::new().unwrap();

    let output = eval(&dir, &["10", "^", "16"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "10000000000000000.0\n");

    let output = eval(&dir, &["1", "/", "10000000"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0.0000001\n");
}

#[test]
fn test_eval_negative_operands() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["-7", "-", "-2"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "-5.0\n");
}

#[test]
fn test_eval_infinite_operand_after_separator() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["--", "-inf", "+", "1"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "-Infinity\n");
}

#[test]
fn test_eval_division_by_zero() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["10", "/", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "Math error: Division by zero is not allowed.\n"
    );
}

#[test]
fn test_eval_unsupported_operator() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["1", "@", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Unexpected error: Unsupported operator: @\n"
    );
}

#[test]
fn test_eval_invalid_number() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["one", "+", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Invalid number entered.\n");
}

#[test]
fn test_eval_modulus_by_zero_is_nan() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["10", "%", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "NaN\n");
}

#[test]
fn test_eval_json_success() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["2", "^", "10", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["code"], "OK");
    assert_eq!(json["data"]["operator"], "^");
    assert_eq!(json["data"]["result"], 1024.0);
    assert_eq!(json["meta"]["entity_type"], "evaluation");
    assert_eq!(json["meta"]["query"], "2 ^ 10");
}

#[test]
fn test_eval_json_error() {
    let dir = TempDir::new().unwrap();
    let output = eval(&dir, &["10", "/", "0", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["type"], "error");
    assert_eq!(json["code"], "DIVISION_BY_ZERO");
    assert_eq!(json["exit_code"], 1);
    assert!(json["data"].is_null());
}

#[test]
fn test_ops_command() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_opcalc"))
        .current_dir(dir.path())
        .args(["ops", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let symbols: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|op| op["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/", "^", "%"]);
    assert_eq!(json["meta"]["count"], 6);
}
