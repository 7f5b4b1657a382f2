//! Interactive command: prompt for number, operator, number and print the result.

use std::io::{BufRead, Write};

use console::style;

use crate::cli::input::Prompter;
use crate::cli::{ShellError, ShellResult};
use crate::config::{DisplayConfig, Settings};
use crate::io::format_number;
use crate::registry::OperationRegistry;
use crate::{debug_event, log_event};

const BANNER: &str = "===== Operator Calculator =====";

/// Run the interactive session on stdin/stdout. Exits with status 1 on failure.
pub fn run_interactive(settings: &Settings, registry: &OperationRegistry) {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let styled = console::colors_enabled();

    if !run_session(registry, &settings.display, styled, stdin.lock(), stdout.lock()) {
        std::process::exit(1);
    }
}

/// Drive one session over arbitrary input/output.
///
/// Every outcome, including failures, ends with exactly one line on `output`.
/// Returns `true` when a result was printed. `styled` decides whether the
/// banner carries ANSI codes; it must describe `output`, not the terminal.
pub fn run_session<R: BufRead, W: Write>(
    registry: &OperationRegistry,
    display: &DisplayConfig,
    styled: bool,
    input: R,
    output: W,
) -> bool {
    let mut prompter = Prompter::new(input, output);

    let outcome = write_header(registry, display, styled, prompter.output())
        .map_err(ShellError::from)
        .and_then(|()| prompt_and_evaluate(registry, &mut prompter));

    let line = match &outcome {
        Ok(value) => format!("Result: {}", format_number(*value, display.precision)),
        Err(e) => {
            debug_event!("shell", "failed", "{e}");
            e.user_message()
        }
    };

    if let Err(e) = writeln!(prompter.output(), "{line}") {
        tracing::warn!("[shell] could not write result: {e}");
        return false;
    }
    outcome.is_ok()
}

fn write_header<W: Write>(
    registry: &OperationRegistry,
    display: &DisplayConfig,
    styled: bool,
    output: &mut W,
) -> std::io::Result<()> {
    if display.show_banner {
        writeln!(output, "{}", style(BANNER).bold().force_styling(styled))?;
    }
    if display.show_operators {
        let symbols: Vec<&str> = registry.supported_symbols().collect();
        writeln!(output, "Supported operators: [{}]", symbols.join(", "))?;
    }
    Ok(())
}

fn prompt_and_evaluate<R: BufRead, W: Write>(
    registry: &OperationRegistry,
    prompter: &mut Prompter<R, W>,
) -> ShellResult<f64> {
    let a = prompter.ask_number("Enter first number: ")?;
    let symbol = prompter.ask("Enter operator: ")?;
    let b = prompter.ask_number("Enter second number: ")?;

    let value = registry.evaluate(&symbol, a, b)?;
    log_event!("shell", "evaluated", "{a} {symbol} {b}");
    Ok(value)
}
