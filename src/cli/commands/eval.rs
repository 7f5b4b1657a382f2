//! Eval command: one-shot `A OP B` from command-line arguments.

use serde::Serialize;

use crate::cli::ShellResult;
use crate::cli::input::parse_number;
use crate::config::Settings;
use crate::io::{
    EntityType, Envelope, JsonNumber, OutputFormat, ResultCode, format_number,
};
use crate::registry::OperationRegistry;

/// JSON payload of a successful evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub a: JsonNumber,
    pub operator: String,
    pub b: JsonNumber,
    pub result: JsonNumber,
}

fn parse_operands(a: &str, b: &str) -> ShellResult<(f64, f64)> {
    Ok((parse_number(a)?, parse_number(b)?))
}

/// Parse both operands and evaluate.
pub fn evaluate_args(registry: &OperationRegistry, a: &str, op: &str, b: &str) -> ShellResult<f64> {
    let (a, b) = parse_operands(a, b)?;
    Ok(registry.evaluate(op, a, b)?)
}

/// Build the JSON envelope for an evaluation.
pub fn evaluation_envelope(
    registry: &OperationRegistry,
    a: &str,
    op: &str,
    b: &str,
) -> Envelope<Evaluation> {
    let query = format!("{a} {op} {b}");
    let outcome = parse_operands(a, b).and_then(|(x, y)| {
        let result = registry.evaluate(op, x, y)?;
        Ok(Evaluation {
            a: JsonNumber(x),
            operator: op.to_string(),
            b: JsonNumber(y),
            result: JsonNumber(result),
        })
    });

    match outcome {
        Ok(evaluation) => {
            let message = format!("{query} = {}", format_number(evaluation.result.0, None));
            Envelope::success(evaluation)
                .with_entity_type(EntityType::Evaluation)
                .with_message(message)
                .with_query(query)
        }
        Err(e) => {
            let suggestions = match e.code() {
                ResultCode::UnsupportedOperator => {
                    let symbols: Vec<&str> = registry.supported_symbols().collect();
                    vec![format!("Use one of: {}", symbols.join(" "))]
                }
                ResultCode::InvalidNumber => {
                    vec!["Operands are decimal numbers such as 2, -0.5 or 1e3".to_string()]
                }
                _ => Vec::new(),
            };
            Envelope::error(e.code(), e.user_message())
                .with_entity_type(EntityType::Evaluation)
                .with_query(query)
                .with_suggestions(suggestions)
        }
    }
}

/// Run eval command. Exits with status 1 on failure.
pub fn run_eval(
    settings: &Settings,
    registry: &OperationRegistry,
    a: &str,
    op: &str,
    b: &str,
    format: OutputFormat,
) {
    if format.is_json() {
        let envelope = evaluation_envelope(registry, a, op, b);
        match envelope.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                std::process::exit(1);
            }
        }
        if envelope.exit_code != 0 {
            std::process::exit(i32::from(envelope.exit_code));
        }
        return;
    }

    match evaluate_args(registry, a, op, b) {
        Ok(value) => println!("{}", format_number(value, settings.display.precision)),
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
