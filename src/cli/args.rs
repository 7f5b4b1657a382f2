//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Operator-registry calculator
#[derive(Parser, Debug)]
#[command(
    name = "opcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Evaluate `a op b` with + - * / ^ %",
    long_about = "Evaluate a single `a op b` expression.\n\nWithout a subcommand, prompts for the first number, the operator and the second number.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for number, operator, number
    #[command(about = "Prompt for the operands and operator (default)")]
    Interactive,

    /// Evaluate an expression given as three arguments
    #[command(
        about = "Evaluate `A OP B` without prompting",
        after_help = "Examples:\n  opcalc eval 2 + 3\n  opcalc eval 2 ^ 10\n  opcalc eval -7 % 3\n  opcalc eval -- -inf + 1\n  opcalc eval 10 / 4 --json\n\nOperands such as -inf or -NaN start with '-' but are not plain numbers; put `--` before them."
    )]
    Eval {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: String,

        /// Operator symbol
        op: String,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the registered operators
    #[command(about = "List supported operators")]
    Ops {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Initialize project
    #[command(about = "Set up .opcalc directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}
