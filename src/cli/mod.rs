//! CLI module for the calculator.
//!
//! Argument parsing, line input, and command dispatch. All terminal I/O lives
//! here; the registry itself never reads or prints.

pub mod args;
pub mod commands;
pub mod input;

pub use args::{Cli, Commands};

use thiserror::Error;

use crate::error::CalcError;
use crate::io::ResultCode;

/// Errors from the interactive and one-shot shells.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("No line found")]
    MissingInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl ShellError {
    /// One-line message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidNumber { .. } => "Invalid number entered.".to_string(),
            Self::Calc(e @ CalcError::DivisionByZero) => format!("Math error: {e}"),
            Self::Calc(e @ CalcError::UnsupportedOperator(_)) => format!("Unexpected error: {e}"),
            Self::MissingInput | Self::Io(_) => format!("Unexpected error: {self}"),
        }
    }

    pub fn code(&self) -> ResultCode {
        match self {
            Self::InvalidNumber { .. } => ResultCode::InvalidNumber,
            Self::MissingInput => ResultCode::MissingInput,
            Self::Io(_) => ResultCode::InternalError,
            Self::Calc(e) => ResultCode::from(e),
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
