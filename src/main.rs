use clap::Parser;
use opcalc::cli::commands::{eval, init, interactive, ops};
use opcalc::cli::{Cli, Commands};
use opcalc::io::OutputFormat;
use opcalc::{OperationRegistry, Settings, debug_event, logging};

fn load_settings(cli: &Cli) -> Settings {
    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    })
}

fn main() {
    let cli = Cli::parse();

    let config = load_settings(&cli);
    logging::init_with_config(&config.logging);

    if cli.config.is_none()
        && let Err(reason) = Settings::check_init()
    {
        debug_event!("config", "using defaults", "{reason}");
    }

    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Init { force } => init::run_init(force),
        Commands::Config => init::run_config(&config),
        Commands::Ops { json } => {
            let registry = OperationRegistry::with_builtins();
            ops::run_ops(&registry, OutputFormat::from_json_flag(json));
        }
        Commands::Eval { a, op, b, json } => {
            let registry = OperationRegistry::with_builtins();
            eval::run_eval(
                &config,
                &registry,
                &a,
                &op,
                &b,
                OutputFormat::from_json_flag(json),
            );
        }
        Commands::Interactive => {
            let registry = OperationRegistry::with_builtins();
            interactive::run_interactive(&config, &registry);
        }
    }
}
