//! Binary operations and the built-in operator table.
//!
//! An [`Operation`] is anything that maps two `f64` operands to a result or a
//! [`CalcError`]. Plain functions and closures with the right signature qualify
//! through the blanket impl, so new operators can be registered without touching
//! a central `match`.

use crate::error::{CalcError, CalcResult};

/// A pure binary operation on real numbers.
pub trait Operation: Send + Sync {
    fn evaluate(&self, a: f64, b: f64) -> CalcResult<f64>;
}

impl<F> Operation for F
where
    F: Fn(f64, f64) -> CalcResult<f64> + Send + Sync,
{
    fn evaluate(&self, a: f64, b: f64) -> CalcResult<f64> {
        self(a, b)
    }
}

pub fn add(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a + b)
}

pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a - b)
}

pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a * b)
}

/// Fails on an exact zero divisor instead of producing an infinity.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Real-exponent power. Domain errors surface as NaN.
pub fn power(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a.powf(b))
}

/// Remainder with the sign of the dividend. A zero divisor yields NaN, not an error.
pub fn modulus(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a % b)
}

/// A built-in operator: its symbol, a display name, and the function behind it.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub symbol: &'static str,
    pub name: &'static str,
    pub eval: fn(f64, f64) -> CalcResult<f64>,
}

/// Operators every default registry starts with, in display order.
pub const BUILTINS: [Builtin; 6] = [
    Builtin { symbol: "+", name: "add", eval: add },
    Builtin { symbol: "-", name: "subtract", eval: subtract },
    Builtin { symbol: "*", name: "multiply", eval: multiply },
    Builtin { symbol: "/", name: "divide", eval: divide },
    Builtin { symbol: "^", name: "power", eval: power },
    Builtin { symbol: "%", name: "modulus", eval: modulus },
];

/// Look up a built-in by symbol.
pub fn builtin(symbol: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.symbol == symbol)
}
