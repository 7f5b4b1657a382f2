//! Error types for operator evaluation.

use thiserror::Error;

/// Failures raised while evaluating `a op b`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalcError::UnsupportedOperator("@".to_string()).to_string(),
            "Unsupported operator: @"
        );
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Division by zero is not allowed."
        );
    }
}
