//! Command-line interface entry point for `NuPrereqs`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use nu_prereqs::config::Config;
use nu_prereqs::info;
use nu_prereqs::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

/// Suggestion limit used when neither the CLI nor the config sets one
const DEFAULT_SUGGESTION_LIMIT: usize = 10;

fn main() {
    let args = Cli::parse();

    // Config commands edit the stored file, so they must not see CLI overrides
    let stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());
    if config.suggestions.limit == 0 {
        config.suggestions.limit = DEFAULT_SUGGESTION_LIMIT;
    }

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            let mut stored = stored;
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Parse { text, json } => commands::parse::run(&text, json),
        command => run_catalog_command(command, &config),
    }
}

/// Run a command that needs the catalog loaded
fn run_catalog_command(command: Command, config: &Config) {
    let catalog = match commands::load_configured_catalog(config) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match command {
        Command::Check {
            target,
            transcript,
            json,
        } => {
            let transcript = commands::transcript_from(&transcript.completed);
            if !commands::check::run(&catalog, &target, &transcript, json) {
                std::process::exit(2);
            }
        }
        Command::Chain { course } => commands::graph::chain(&catalog, &course),
        Command::Unlocks { course } => commands::graph::unlocks(&catalog, &course),
        Command::Dangling => commands::graph::dangling(&catalog),
        Command::Suggest {
            transcript,
            limit,
            json,
        } => {
            let transcript = commands::transcript_from(&transcript.completed);
            let limit = limit.unwrap_or(config.suggestions.limit);
            commands::suggest::run(&catalog, &transcript, limit, json);
        }
        Command::Report {
            transcript,
            target,
            format,
            output,
        } => {
            let transcript = commands::transcript_from(&transcript.completed);
            let request = commands::report::ReportRequest {
                target: target.as_deref(),
                format: format.into(),
                output: output.as_deref(),
            };
            commands::report::run(&catalog, &transcript, &request, config);
        }
        Command::Export { output, stdout } => {
            commands::export::run(&catalog, output.as_deref(), stdout, config);
        }
        Command::Config { .. } | Command::Parse { .. } => {
            unreachable!("handled before the catalog is loaded")
        }
    }
}
