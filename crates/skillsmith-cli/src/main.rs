//! # Skillsmith CLI
//!
//! Scaffolds and validates agent skill packages.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments (clap handles `--help` /
//!    `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch: no subcommand builds a package, otherwise run the subcommand.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! Exit codes are listed in [`error`].

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, OutputFormat, ScaffoldArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and go to stdout.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(3);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose_errors();
    let format = cli.global.output_format;

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(CliError::from(e), verbose, format),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, &output) {
        Ok(()) => {
            info!("Skillsmith completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, output.format()),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let Some(command) = cli.command else {
        return commands::scaffold::execute(cli.scaffold, &config, output);
    };
    reject_build_flags(&cli.scaffold)?;

    match command {
        Commands::Check(args) => commands::check::execute(args, output),
        Commands::Categories => commands::categories::execute(output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config.as_deref(), &config, output)
        }
    }
}

/// Build flags given in front of a subcommand would be silently ignored.
fn reject_build_flags(args: &ScaffoldArgs) -> CliResult<()> {
    let given = args.given_flags();
    if given.is_empty() {
        return Ok(());
    }
    Err(CliError::InvalidInput {
        message: format!("{} cannot be used with a subcommand", given.join(", ")),
    })
}

/// Translate a `CliError` into a user message and an exit code.
///
/// Messages go to stderr so they appear even when stdout is redirected; the
/// JSON form goes to stdout so scripts can parse it.
fn handle_error(err: CliError, verbose: bool, format: OutputFormat) -> ExitCode {
    err.log();

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&err.to_json()) {
            Ok(text) => println!("{text}"),
            Err(_) => eprint!("{}", err.format_plain(verbose)),
        },
        OutputFormat::Plain => eprint!("{}", err.format_plain(verbose)),
        OutputFormat::Human | OutputFormat::Auto => {
            if std::io::stderr().is_terminal() {
                eprint!("{}", err.format_colored(verbose));
            } else {
                eprint!("{}", err.format_plain(verbose));
            }
        }
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["skillsmith", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn build_flags_with_subcommand_are_rejected() {
        let cli = Cli::try_parse_from(["skillsmith", "-o", "out", "check", "./pkg"]).unwrap();
        let err = reject_build_flags(&cli.scaffold).unwrap_err();
        assert!(err.to_string().contains("--output"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn plain_subcommand_passes() {
        let cli = Cli::try_parse_from(["skillsmith", "-q", "categories"]).unwrap();
        assert!(reject_build_flags(&cli.scaffold).is_ok());
    }

    #[test]
    fn missing_arguments_use_stderr() {
        let err = Cli::try_parse_from(["skillsmith"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
