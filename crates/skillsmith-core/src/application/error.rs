//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not validation.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, ErrorKind, SkillError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A package directory already exists at the target location.
    #[error("Skill package already exists at {path}")]
    PackageAlreadyExists { path: PathBuf },

    /// Atomic directory creation found the path already taken.
    #[error("Path already exists: {path}")]
    PathExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The build failed after the package root was created; the root was removed.
    #[error("Build of {path} failed and was rolled back: {cause}")]
    RolledBack {
        path: PathBuf,
        #[source]
        cause: Box<SkillError>,
    },

    /// The build failed and the partially created package could not be removed.
    #[error("Rollback failed for {path}: {reason} (original error: {cause})")]
    RollbackFailed {
        path: PathBuf,
        reason: String,
        #[source]
        cause: Box<SkillError>,
    },

    /// A directory handed to `check` has no primary file.
    #[error("No SKILL.md found in {path}")]
    MissingPrimaryFile { path: PathBuf },

    /// The template provider could not supply a template.
    #[error("Template unavailable: {reason}")]
    TemplateUnavailable { reason: String },

    /// An in-memory adapter lock was poisoned.
    #[error("Adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PackageAlreadyExists { path } | Self::PathExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Existing packages are never overwritten".into(),
                format!(
                    "Remove it first (rm -rf {}) or choose a different --name",
                    path.display()
                ),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::RolledBack { cause, .. } => {
                let mut hints = cause.suggestions();
                hints.push("No partial package was left behind".into());
                hints
            }
            Self::RollbackFailed { path, .. } => vec![
                format!("A partial package may remain at {}", path.display()),
                format!("Remove it manually: rm -rf {}", path.display()),
            ],
            Self::MissingPrimaryFile { path } => vec![
                format!("Expected {}/SKILL.md", path.display()),
                "Point check at the package directory, not its parent".into(),
            ],
            Self::TemplateUnavailable { .. } => vec![
                "Check templates.primary_path in your configuration".into(),
                "Unset it to use the built-in template".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PackageAlreadyExists { .. } | Self::PathExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Io,
            Self::RolledBack { cause, .. } => cause.category(),
            Self::MissingPrimaryFile { .. } => ErrorCategory::Validation,
            Self::TemplateUnavailable { .. } => ErrorCategory::Configuration,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }

    /// Position in the four-kind taxonomy, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::PackageAlreadyExists { .. } | Self::PathExists { .. } => {
                Some(ErrorKind::PackageAlreadyExists)
            }
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => {
                Some(ErrorKind::IoFailure)
            }
            Self::RolledBack { cause, .. } => cause.kind(),
            _ => None,
        }
    }
}
