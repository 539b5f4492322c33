//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.
//!
//! Without a subcommand the binary builds a skill package from the flattened
//! [`ScaffoldArgs`]; subcommands cover inspection and housekeeping.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use skillsmith_core::domain::Subdirectory;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "skillsmith",
    bin_name = "skillsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold and validate agent skill packages",
    long_about = "Skillsmith creates a standardized skill package (SKILL.md with \
                  frontmatter, plus scripts/ and examples/) from a name and a \
                  description, validating both before anything touches disk.",
    after_help = "EXAMPLES:\n\
        \x20 skillsmith --name excel-handler --description \"Reads and writes Excel files\"\n\
        \x20 skillsmith -n api-tester -d \"Exercises HTTP APIs\" --output ./skills --category testing\n\
        \x20 skillsmith check ./skills/api-tester\n\
        \x20 skillsmith completions bash > /usr/share/bash-completion/completions/skillsmith",
    subcommand_negates_reqs = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments of the default (build) invocation.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Optional subcommand; without one a package is built.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate an existing skill package.
    #[command(
        about = "Validate an existing skill package",
        after_help = "EXAMPLES:\n\
            \x20 skillsmith check ./excel-handler\n\
            \x20 skillsmith check ./skills/api-tester --output-format json"
    )]
    Check(CheckArgs),

    /// List the suggested categories.
    #[command(visible_alias = "ls", about = "List suggested categories")]
    Categories,

    /// Initialise a Skillsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 skillsmith init           # platform config directory\n\
            \x20 skillsmith init --local   # .skillsmith.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skillsmith completions bash > ~/.local/share/bash-completion/completions/skillsmith\n\
            \x20 skillsmith completions zsh  > ~/.zfunc/_skillsmith\n\
            \x20 skillsmith completions fish > ~/.config/fish/completions/skillsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Skillsmith configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 skillsmith config get scaffold.subdirectories\n\
            \x20 skillsmith config list\n\
            \x20 skillsmith config path"
    )]
    Config(ConfigCommands),
}

// ── default invocation ────────────────────────────────────────────────────────

/// Arguments for building a skill package.
#[derive(Debug, Default, Args)]
pub struct ScaffoldArgs {
    /// Package identifier: lowercase letters, digits and '-', at most 64 characters.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "IDENTIFIER",
        required_unless_present = "interactive",
        help = "Skill identifier (lowercase letters, digits, '-'; max 64)"
    )]
    pub name: Option<String>,

    /// What the skill does; at most 1024 characters, no `<...>` tags.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        required_unless_present = "interactive",
        help = "Skill description (max 1024 characters, no tags)"
    )]
    pub description: Option<String>,

    /// Parent directory of the package.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory [default: .] (created if missing)"
    )]
    pub output: Option<PathBuf>,

    /// Category label; unknown labels are accepted.
    #[arg(
        long = "category",
        value_name = "LABEL",
        help = "Category (see `skillsmith categories`)"
    )]
    pub category: Option<String>,

    /// A rule added under "User Guidelines"; repeatable.
    #[arg(
        short = 'g',
        long = "guideline",
        value_name = "RULE",
        help = "Add a user guideline (repeatable)"
    )]
    pub guidelines: Vec<String>,

    /// Extra subdirectory on top of the configured set; repeatable.
    #[arg(
        short = 'w',
        long = "with",
        value_name = "DIR",
        value_parser = parse_subdirectory,
        help = "Also create scripts | references | examples | assets (repeatable)"
    )]
    pub with: Vec<Subdirectory>,

    /// Write `scripts/.gitkeep` and `examples/README.md`.
    #[arg(long = "placeholders", help = "Write placeholder files into subdirectories")]
    pub placeholders: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Prompt for missing fields, re-prompting until they validate.
    #[arg(short = 'i', long = "interactive", help = "Prompt for fields interactively")]
    pub interactive: bool,
}

impl ScaffoldArgs {
    /// Parent directory of the package, the current directory when unset.
    pub fn output_dir(&self) -> &Path {
        self.output.as_deref().unwrap_or(Path::new("."))
    }

    /// Long names of the build flags present on the command line.
    ///
    /// These only mean something without a subcommand, but clap still
    /// accepts them in front of one.
    pub fn given_flags(&self) -> Vec<&'static str> {
        [
            ("--name", self.name.is_some()),
            ("--description", self.description.is_some()),
            ("--output", self.output.is_some()),
            ("--category", self.category.is_some()),
            ("--guideline", !self.guidelines.is_empty()),
            ("--with", !self.with.is_empty()),
            ("--placeholders", self.placeholders),
            ("--dry-run", self.dry_run),
            ("--interactive", self.interactive),
        ]
        .into_iter()
        .filter_map(|(flag, given)| given.then_some(flag))
        .collect()
    }
}

fn parse_subdirectory(value: &str) -> Result<Subdirectory, String> {
    Subdirectory::from_str(value)
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `skillsmith check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Package directory containing SKILL.md.
    #[arg(value_name = "DIR", help = "Skill package directory")]
    pub dir: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `skillsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.skillsmith.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skillsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `skillsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.version`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_default_invocation() {
        let cli = Cli::try_parse_from([
            "skillsmith",
            "--name",
            "excel-handler",
            "--description",
            "Reads Excel files",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.scaffold.name.as_deref(), Some("excel-handler"));
        assert_eq!(cli.scaffold.output_dir(), Path::new("."));
        assert!(cli.scaffold.output.is_none());
    }

    #[test]
    fn name_is_required_without_interactive() {
        let err = Cli::try_parse_from(["skillsmith", "--description", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn interactive_lifts_requirements() {
        let cli = Cli::try_parse_from(["skillsmith", "--interactive"]).unwrap();
        assert!(cli.scaffold.interactive);
    }

    #[test]
    fn subcommand_does_not_need_name() {
        let cli = Cli::try_parse_from(["skillsmith", "check", "./pkg"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check(_))));
    }

    #[test]
    fn repeatable_guidelines_and_subdirectories() {
        let cli = Cli::try_parse_from([
            "skillsmith",
            "-n",
            "pdf-tools",
            "-d",
            "Handles PDFs",
            "-g",
            "Never modify originals",
            "-g",
            "Ask before deleting",
            "--with",
            "references",
            "--with",
            "assets",
        ])
        .unwrap();

        assert_eq!(cli.scaffold.guidelines.len(), 2);
        assert_eq!(
            cli.scaffold.with,
            vec![Subdirectory::References, Subdirectory::Assets]
        );
    }

    #[test]
    fn unknown_subdirectory_is_rejected() {
        assert!(
            Cli::try_parse_from(["skillsmith", "-n", "x", "-d", "y", "--with", "src"]).is_err()
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let err = Cli::try_parse_from(["skillsmith", "-n", "x", "-d", "y", "--quiet", "--verbose"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["skillsmith", "-v", "check", "./pkg"]).unwrap();
        assert_eq!(cli.global.verbose, 1);
        assert!(matches!(cli.command, Some(Commands::Check(_))));
        assert!(cli.scaffold.given_flags().is_empty());

        let cli = Cli::try_parse_from([
            "skillsmith",
            "--no-color",
            "--output-format",
            "json",
            "--config",
            "x.toml",
            "config",
            "list",
        ])
        .unwrap();
        assert!(cli.global.no_color);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert_eq!(cli.global.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::List))
        ));
    }

    #[test]
    fn build_flags_before_subcommand_are_recorded() {
        let cli =
            Cli::try_parse_from(["skillsmith", "-n", "x", "--dry-run", "categories"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Categories)));
        assert_eq!(cli.scaffold.given_flags(), vec!["--name", "--dry-run"]);
    }
}
