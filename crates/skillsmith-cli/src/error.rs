//! Error handling for the Skillsmith CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages carrying the failure kind
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! |  1   | Invalid input, configuration, cancelled        |
//! |  2   | Package already exists, build rolled back      |
//! |  3   | Unexpected I/O failure, failed rollback, bugs  |

use std::error::Error;

use owo_colors::OwoColorize;
use serde_json::{Value, json};
use thiserror::Error;

use skillsmith_core::{
    application::ApplicationError,
    error::{ErrorCategory as CoreCategory, SkillError},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by the `skillsmith` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `skillsmith-core`.
    #[error(transparent)]
    Core(#[from] SkillError),

    /// Input rejected before it reached the core.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside the build pipeline failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user aborted an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature compiled out of this binary.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(feature = "interactive")]
impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError {
            message: format!("Prompt failed: {err}"),
            source: std::io::Error::other(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),

            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Show which file is in use: skillsmith config path".into(),
                "Write a fresh default file: skillsmith init --force".into(),
                "Unset SKILLSMITH__* environment variables to rule them out".into(),
            ],

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Cancelled => vec!["No changes were made".into()],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                format!(
                    "Install with the feature enabled: cargo install skillsmith-cli --features {}",
                    feature
                ),
                "Or pass --name and --description directly".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(SkillError::Application(ApplicationError::RolledBack { .. })) => {
                ErrorCategory::BuildFailure
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::BuildFailure,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::System,
            },
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::System,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  1   |
    /// | Configuration |  1   |
    /// | Build failure |  2   |
    /// | System        |  3   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::Configuration => 1,
            ErrorCategory::BuildFailure => 2,
            ErrorCategory::System => 3,
        }
    }

    /// Taxonomy label shown next to the message, when there is one.
    fn label(&self) -> Option<String> {
        match self {
            Self::Core(core) => core.kind().map(|k| k.to_string()),
            _ => None,
        }
    }

    fn headline(&self) -> String {
        match self.label() {
            Some(kind) => format!("[{kind}] {self}"),
            None => self.to_string(),
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.headline().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self.headline()));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Machine-readable form for `--output-format json`.
    pub fn to_json(&self) -> Value {
        let state = match self {
            Self::Core(core) => Some(core.build_state().to_string()),
            _ => None,
        };
        json!({
            "status": "error",
            "kind": self.label(),
            "message": self.to_string(),
            "state": state,
            "suggestions": self.suggestions(),
            "exit_code": self.exit_code(),
        })
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::BuildFailure => tracing::warn!("Build failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::System => tracing::error!("System error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected input or an aborted prompt.
    UserError,
    /// The package collided, or the build failed and was rolled back.
    BuildFailure,
    /// Configuration error.
    Configuration,
    /// Unexpected I/O or internal failure.
    System,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e}", f().into()),
            source: Some(Box::new(e)),
        })
    }
}
