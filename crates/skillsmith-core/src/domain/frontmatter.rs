//! YAML frontmatter of `SKILL.md`.
//!
//! Rendering goes through `serde_yml` so descriptions containing `:`, `#` or
//! quotes still produce a block that parses back to the same values.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::request::ValidatedRequest, error::DomainError, validation::DomainValidator,
    value_objects::Category,
};

const DELIMITER: &str = "---";

/// Metadata block at the top of a primary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Frontmatter {
    pub fn from_request(request: &ValidatedRequest, version: &str) -> Self {
        Self {
            name: request.name().to_string(),
            description: request.description().to_string(),
            version: Some(version.to_string()),
            category: request.category().cloned(),
        }
    }

    /// The block including both `---` delimiter lines, without a trailing newline.
    pub fn to_block(&self) -> Result<String, DomainError> {
        let yaml = serde_yml::to_string(self).map_err(|e| DomainError::InvalidFrontmatter {
            reason: e.to_string(),
        })?;

        // serde_yml quotes `1.0.0`; a dotted numeric version reads back as a
        // string without the quotes.
        let lines: Vec<String> = yaml
            .trim_end()
            .lines()
            .map(|line| match self.version.as_deref() {
                Some(v) if line.starts_with("version:") && is_dotted_triple(v) => {
                    format!("version: {v}")
                }
                _ => line.to_string(),
            })
            .collect();

        Ok(format!("{DELIMITER}\n{}\n{DELIMITER}", lines.join("\n")))
    }

    /// Split `content` into its frontmatter and the body that follows it.
    pub fn parse(content: &str) -> Result<(Self, &str), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidFrontmatter {
            reason: reason.to_string(),
        };

        let rest = content
            .strip_prefix(DELIMITER)
            .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
            .ok_or_else(|| invalid("file must start with a '---' line"))?;

        let (yaml, body) = match rest.find(&format!("\n{DELIMITER}")) {
            Some(end) => {
                let after = &rest[end + 1 + DELIMITER.len()..];
                let body = after
                    .strip_prefix("\r\n")
                    .or_else(|| after.strip_prefix('\n'))
                    .unwrap_or(after);
                (&rest[..end], body)
            }
            None if rest.starts_with(DELIMITER) => ("", &rest[DELIMITER.len()..]),
            None => return Err(invalid("missing closing '---' line")),
        };

        let frontmatter: Frontmatter =
            serde_yml::from_str(yaml).map_err(|e| invalid(&e.to_string()))?;

        Ok((frontmatter, body))
    }

    /// Run the request validator over the stored name and description.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_identifier(&self.name)?;
        DomainValidator::validate_description(&self.description)
    }
}

/// `MAJOR.MINOR.PATCH` with decimal parts only.
fn is_dotted_triple(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}
