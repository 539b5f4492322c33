//! Unified error handling for Skillsmith Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use std::fmt;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{BuildState, DomainError};

/// Root error type for Skillsmith Core operations.
#[derive(Debug, Error, Clone)]
pub enum SkillError {
    /// Errors from the domain layer (validation failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (collisions, I/O, rollback).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SkillError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// Position in the four-kind taxonomy, if any.
    ///
    /// Errors outside the scaffold pipeline (frontmatter inspection, a
    /// poisoned lock) return `None`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(DomainError::InvalidIdentifier { .. }) => {
                Some(ErrorKind::InvalidIdentifier)
            }
            Self::Domain(DomainError::InvalidDescription { .. }) => {
                Some(ErrorKind::InvalidDescription)
            }
            Self::Domain(_) => None,
            Self::Application(e) => e.kind(),
        }
    }

    /// Terminal build state implied by this error.
    pub fn build_state(&self) -> BuildState {
        match self {
            Self::Application(
                ApplicationError::RolledBack { .. } | ApplicationError::RollbackFailed { .. },
            ) => BuildState::RolledBack,
            _ => BuildState::Rejected,
        }
    }
}

/// The externally visible failure taxonomy of the scaffold pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidIdentifier,
    InvalidDescription,
    PackageAlreadyExists,
    IoFailure,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "InvalidIdentifier",
            Self::InvalidDescription => "InvalidDescription",
            Self::PackageAlreadyExists => "PackageAlreadyExists",
            Self::IoFailure => "IOFailure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SkillResult<T> = Result<T, SkillError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{DescriptionViolation, IdentifierViolation};

    fn io_error() -> SkillError {
        ApplicationError::FilesystemError {
            path: PathBuf::from("/tmp/x"),
            reason: "disk full".into(),
        }
        .into()
    }

    #[test]
    fn kinds_map_to_taxonomy() {
        let id: SkillError = DomainError::InvalidIdentifier {
            identifier: "A".into(),
            violation: IdentifierViolation::DisallowedChar { ch: 'A', position: 1 },
        }
        .into();
        let desc: SkillError = DomainError::InvalidDescription {
            violation: DescriptionViolation::Empty,
        }
        .into();
        let exists: SkillError = ApplicationError::PackageAlreadyExists {
            path: PathBuf::from("/tmp/x"),
        }
        .into();

        assert_eq!(id.kind(), Some(ErrorKind::InvalidIdentifier));
        assert_eq!(desc.kind(), Some(ErrorKind::InvalidDescription));
        assert_eq!(exists.kind(), Some(ErrorKind::PackageAlreadyExists));
        assert_eq!(io_error().kind(), Some(ErrorKind::IoFailure));
    }

    #[test]
    fn rolled_back_keeps_cause_kind_and_category() {
        let err: SkillError = ApplicationError::RolledBack {
            path: PathBuf::from("/tmp/x"),
            cause: Box::new(io_error()),
        }
        .into();

        assert_eq!(err.kind(), Some(ErrorKind::IoFailure));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.build_state(), BuildState::RolledBack);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("No partial package"))
        );
    }

    #[test]
    fn validation_errors_are_rejections() {
        let err: SkillError = DomainError::EmptyLayout.into();
        assert_eq!(err.build_state(), BuildState::Rejected);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn io_failure_displays_as_spelled_in_reports() {
        assert_eq!(ErrorKind::IoFailure.to_string(), "IOFailure");
    }
}
