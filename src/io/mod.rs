//! Output handling for the CLI.
//!
//! This module provides:
//! - Number formatting for text output
//! - A JSON envelope for `--json` output

pub mod envelope;
pub mod format;

pub use envelope::{EntityType, Envelope, ResultCode, Status};
pub use format::{JsonNumber, OutputFormat, format_number};
