//! Domain value objects: SkillName, Description, Category, Subdirectory.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `SkillName` and `Description` can only be constructed by
//! [`DomainValidator`](crate::domain::DomainValidator), so holding one is
//! proof the underlying string passed validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── SkillName ────────────────────────────────────────────────────────────────

/// A validated skill identifier (`^[a-z0-9-]{1,64}$`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillName(pub(crate) String);

impl SkillName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human title derived from the identifier: `excel-handler` -> `Excel Handler`.
    pub fn title(&self) -> String {
        self.0
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SkillName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Description ──────────────────────────────────────────────────────────────

/// A validated, tag-free description of 1 to 1024 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(pub(crate) String);

impl Description {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Category ─────────────────────────────────────────────────────────────────

/// Suggested skill category.
///
/// Unknown labels are kept as [`Category::Custom`]; a category is metadata,
/// not something the validator rejects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    DataProcessing,
    CodeGeneration,
    Testing,
    Documentation,
    DevOps,
    ApiIntegration,
    FileManagement,
    Automation,
    Custom(String),
}

impl Category {
    /// The suggested (built-in) categories, in display order.
    pub const SUGGESTED: [Category; 8] = [
        Self::DataProcessing,
        Self::CodeGeneration,
        Self::Testing,
        Self::Documentation,
        Self::DevOps,
        Self::ApiIntegration,
        Self::FileManagement,
        Self::Automation,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::DataProcessing => "data-processing",
            Self::CodeGeneration => "code-generation",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
            Self::DevOps => "devops",
            Self::ApiIntegration => "api-integration",
            Self::FileManagement => "file-management",
            Self::Automation => "automation",
            Self::Custom(label) => label,
        }
    }

    /// One-line summary for listings.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::DataProcessing => "Transform, parse, or analyse data files",
            Self::CodeGeneration => "Produce source code or boilerplate",
            Self::Testing => "Write or run tests",
            Self::Documentation => "Author or maintain documentation",
            Self::DevOps => "Build, deploy, and operate services",
            Self::ApiIntegration => "Call or wrap external APIs",
            Self::FileManagement => "Organise, move, or convert files",
            Self::Automation => "Automate repetitive workflows",
            Self::Custom(_) => "Custom category",
        }
    }

    pub fn is_suggested(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "data-processing" => Self::DataProcessing,
            "code-generation" => Self::CodeGeneration,
            "testing" => Self::Testing,
            "documentation" => Self::Documentation,
            "devops" => Self::DevOps,
            "api-integration" => Self::ApiIntegration,
            "file-management" => Self::FileManagement,
            "automation" => Self::Automation,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

// ── Subdirectory ─────────────────────────────────────────────────────────────

/// Conventional subdirectories of a skill package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subdirectory {
    Scripts,
    References,
    Examples,
    Assets,
}

impl Subdirectory {
    /// Created when the caller does not configure a set.
    pub const DEFAULT: [Subdirectory; 2] = [Self::Scripts, Self::Examples];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scripts => "scripts",
            Self::References => "references",
            Self::Examples => "examples",
            Self::Assets => "assets",
        }
    }
}

impl fmt::Display for Subdirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subdirectory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scripts" => Ok(Self::Scripts),
            "references" | "refs" => Ok(Self::References),
            "examples" => Ok(Self::Examples),
            "assets" => Ok(Self::Assets),
            other => Err(format!(
                "unknown subdirectory '{other}' (expected scripts, references, examples, or assets)"
            )),
        }
    }
}
