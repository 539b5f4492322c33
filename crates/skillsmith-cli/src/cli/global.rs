//! Flags shared by the default invocation and every subcommand.

use std::path::PathBuf;

use clap::{builder::FalseyValueParser, ArgAction, Args, ValueEnum};

/// Global arguments, flattened into [`super::Cli`].
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log output: -v info, -vv debug (state transitions), -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default locations
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results and errors are printed
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Show the error cause chain instead of the `--verbose` hint.
    pub fn verbose_errors(&self) -> bool {
        self.verbose > 0
    }
}

/// How the CLI renders its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise
    #[default]
    Auto,
    /// Colored text
    Human,
    /// Text without ANSI codes
    Plain,
    /// One JSON document on stdout
    Json,
}
