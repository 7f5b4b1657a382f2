//! Operator registry: symbol to [`Operation`] dispatch.
//!
//! The registry owns its operations. Registration is expected to finish before
//! evaluation starts; after that the registry is read-only and can be shared
//! across threads behind an `Arc`.

use indexmap::IndexMap;

use crate::debug_event;
use crate::error::{CalcError, CalcResult};
use crate::operation::{BUILTINS, Operation};

/// Mapping from operator symbol to the operation it evaluates.
///
/// Symbols are case-sensitive and unique. Iteration follows registration order;
/// replacing an existing symbol keeps its original position.
#[derive(Default)]
pub struct OperationRegistry {
    operations: IndexMap<String, Box<dyn Operation>>,
}

impl OperationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `+ - * / ^ %`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in BUILTINS {
            registry.register(builtin.symbol, builtin.eval);
        }
        registry
    }

    /// Insert or replace the operation for `symbol`. Last write wins.
    pub fn register(&mut self, symbol: impl Into<String>, op: impl Operation + 'static) {
        let symbol = symbol.into();
        debug_event!("registry", "register", "{symbol}");
        self.operations.insert(symbol, Box::new(op));
    }

    /// Evaluate `a symbol b`.
    ///
    /// Fails with [`CalcError::UnsupportedOperator`] when nothing is registered
    /// under `symbol`; otherwise returns whatever the operation returns.
    pub fn evaluate(&self, symbol: &str, a: f64, b: f64) -> CalcResult<f64> {
        let op = self
            .operations
            .get(symbol)
            .ok_or_else(|| CalcError::UnsupportedOperator(symbol.to_string()))?;
        op.evaluate(a, b)
    }

    /// Registered symbols, for display.
    pub fn supported_symbols(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("symbols", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}
