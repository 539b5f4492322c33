// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use std::fmt;
use thiserror::Error;

use crate::domain::validation::{MAX_DESCRIPTION_LENGTH, MAX_IDENTIFIER_LENGTH};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (re-prompt loops keep the last error around)
/// - Structured (the violated rule is a value, not just a string)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Request validation
    // ========================================================================
    #[error("invalid identifier '{identifier}': {violation}")]
    InvalidIdentifier {
        identifier: String,
        violation: IdentifierViolation,
    },

    #[error("invalid description: {violation}")]
    InvalidDescription { violation: DescriptionViolation },

    // ========================================================================
    // Existing package inspection
    // ========================================================================
    #[error("invalid frontmatter: {reason}")]
    InvalidFrontmatter { reason: String },

    #[error("frontmatter name '{name}' does not match directory '{directory}'")]
    NameMismatch { name: String, directory: String },

    #[error("template references unknown placeholder '{{{{{name}}}}}'")]
    UnknownPlaceholder { name: String },

    #[error("layout has no entries")]
    EmptyLayout,

    #[error("duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed in layout: {path}")]
    AbsolutePathNotAllowed { path: String },
}

/// Which identifier rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierViolation {
    Empty,
    TooLong { length: usize },
    DisallowedChar { ch: char, position: usize },
}

impl fmt::Display for IdentifierViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("identifier cannot be empty"),
            Self::TooLong { length } => write!(
                f,
                "identifier is {length} characters long (max {MAX_IDENTIFIER_LENGTH})"
            ),
            Self::DisallowedChar { ch, position } => {
                write!(f, "character {ch:?} at position {position} is not allowed")
            }
        }
    }
}

/// Which description rule was broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionViolation {
    Empty,
    TooLong { length: usize },
    ContainsTag { tag: String },
}

impl fmt::Display for DescriptionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("description cannot be empty"),
            Self::TooLong { length } => write!(
                f,
                "description is {length} characters long (max {MAX_DESCRIPTION_LENGTH})"
            ),
            Self::ContainsTag { tag } => write!(f, "description contains tag-like text {tag:?}"),
        }
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { violation, .. } => {
                let mut hints = match violation {
                    IdentifierViolation::Empty => vec!["Provide a name with --name".into()],
                    IdentifierViolation::TooLong { length } => vec![format!(
                        "Shorten the name by {} character(s)",
                        length - MAX_IDENTIFIER_LENGTH
                    )],
                    IdentifierViolation::DisallowedChar { ch, .. } => {
                        let mut v = vec![format!("Remove or replace {ch:?}")];
                        if ch.is_ascii_uppercase() {
                            v.push(format!("Use lowercase: {:?}", ch.to_ascii_lowercase()));
                        } else if *ch == '_' || ch.is_whitespace() {
                            v.push("Use '-' to separate words".into());
                        }
                        v
                    }
                };
                hints.push("Allowed: lowercase letters a-z, digits 0-9, hyphen '-'".into());
                hints.push("Examples: excel-handler, api-v2, pdf-tools".into());
                hints
            }
            Self::InvalidDescription { violation } => match violation {
                DescriptionViolation::Empty => {
                    vec!["Provide a description with --description".into()]
                }
                DescriptionViolation::TooLong { length } => vec![
                    format!(
                        "Shorten the description by {} character(s)",
                        length - MAX_DESCRIPTION_LENGTH
                    ),
                    "Move detailed instructions into SKILL.md instead".into(),
                ],
                DescriptionViolation::ContainsTag { tag } => vec![
                    format!("Remove {tag:?} from the description"),
                    "Descriptions are plain text; '<' followed by '>' is read as markup".into(),
                ],
            },
            Self::InvalidFrontmatter { .. } => vec![
                "SKILL.md must start with a YAML block between '---' lines".into(),
                "The block needs at least 'name' and 'description'".into(),
            ],
            Self::NameMismatch { name, .. } => vec![
                format!("Rename the directory to '{name}'"),
                "Or update the 'name' field in SKILL.md".into(),
            ],
            Self::UnknownPlaceholder { name } => vec![
                format!("Remove '{{{{{name}}}}}' from the template file"),
                format!("Known placeholders: {}", crate::domain::PLACEHOLDERS.join(", ")),
            ],
            _ => vec!["This is likely a bug in the layout renderer".into()],
        }
    }
}
