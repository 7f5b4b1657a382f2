//! Ops command: list registered operator symbols.

use serde::Serialize;

use crate::io::{EntityType, Envelope, OutputFormat};
use crate::operation::builtin;
use crate::registry::OperationRegistry;

/// One row of the operator listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorInfo {
    pub symbol: String,
    pub name: String,
}

/// Registered operators in registry order. Operators that are not built-ins
/// are listed as `custom`.
pub fn operator_list(registry: &OperationRegistry) -> Vec<OperatorInfo> {
    registry
        .supported_symbols()
        .map(|symbol| OperatorInfo {
            symbol: symbol.to_string(),
            name: builtin(symbol).map_or("custom", |b| b.name).to_string(),
        })
        .collect()
}

pub fn run_ops(registry: &OperationRegistry, format: OutputFormat) {
    let operators = operator_list(registry);

    if format.is_json() {
        let count = operators.len();
        let envelope = Envelope::success(operators)
            .with_entity_type(EntityType::Operator)
            .with_count(count)
            .with_message(format!("{count} operators"));
        match envelope.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Supported operators:");
    for op in &operators {
        println!("  {:<3} {}", op.symbol, op.name);
    }
}
