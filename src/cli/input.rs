//! Line-oriented input: prompts, line reading, number parsing.

use std::io::{BufRead, Write};

use super::{ShellError, ShellResult};

/// Parse a decimal number, ignoring surrounding whitespace.
///
/// Accepts everything `f64::from_str` does, including exponents,
/// `inf`/`Infinity` and `NaN`.
pub fn parse_number(text: &str) -> ShellResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ShellError::InvalidNumber {
            input: text.to_string(),
        })
}

/// Reads answers to prompts from a line source.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line.
    ///
    /// The line terminator is stripped; other whitespace is kept so operator
    /// symbols are matched exactly as typed.
    pub fn ask(&mut self, prompt: &str) -> ShellResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::MissingInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn ask_number(&mut self, prompt: &str) -> ShellResult<f64> {
        let line = self.ask(prompt)?;
        parse_number(&line)
    }

    /// Direct access to the output for non-prompt lines.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
