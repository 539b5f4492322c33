//! Skill template and render context.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SkillTemplate (Entity)                                     │
//! │  ├── primary: TemplateSource      → SKILL.md skeleton       │
//! │  └── placeholders: Vec<PlaceholderFile>                     │
//! │      └── (subdirectory, file name, TemplateSource)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{SKILL_NAME}} -> "pdf-tools"   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The skeleton text is owned by a template provider (built-in constants or a
//! user file). This module only knows how to substitute values into it; it
//! never writes prose of its own beyond the frontmatter block and the
//! user-guidelines list.

use std::collections::HashMap;
use std::fmt;

use crate::domain::{
    entities::request::ValidatedRequest, error::DomainError, frontmatter::Frontmatter,
    value_objects::Subdirectory,
};

/// File name of the primary instruction file.
pub const PRIMARY_FILE: &str = "SKILL.md";

/// Frontmatter version written when none is configured.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Every placeholder a template may reference.
pub const PLACEHOLDERS: [&str; 7] = [
    "FRONTMATTER",
    "SKILL_NAME",
    "SKILL_TITLE",
    "DESCRIPTION",
    "CATEGORY",
    "VERSION",
    "USER_GUIDELINES_SECTION",
];

// ── Template content ──────────────────────────────────────────────────────────

/// Where template text lives.
///
/// `Static` references compile-time strings without allocation; `Owned`
/// holds text loaded at runtime (e.g. a user skeleton file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An optional file dropped into a subdirectory (`scripts/.gitkeep`, ...).
///
/// Only materialized when placeholders are requested and the subdirectory is
/// part of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderFile {
    pub directory: Subdirectory,
    pub file_name: &'static str,
    pub content: TemplateSource,
}

impl PlaceholderFile {
    pub fn new(directory: Subdirectory, file_name: &'static str, content: TemplateSource) -> Self {
        Self {
            directory,
            file_name,
            content,
        }
    }
}

/// The full set of text a package is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTemplate {
    pub primary: TemplateSource,
    pub placeholders: Vec<PlaceholderFile>,
}

impl SkillTemplate {
    pub fn new(primary: TemplateSource) -> Self {
        Self {
            primary,
            placeholders: Vec::new(),
        }
    }

    pub fn with_placeholder(mut self, file: PlaceholderFile) -> Self {
        self.placeholders.push(file);
        self
    }

    /// Placeholder files belonging to `directory`.
    pub fn placeholders_for(&self, directory: Subdirectory) -> impl Iterator<Item = &PlaceholderFile> {
        self.placeholders
            .iter()
            .filter(move |p| p.directory == directory)
    }
}

// ── Render context ────────────────────────────────────────────────────────────

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `SKILL_NAME` | "excel-handler" | identifier |
/// | `SKILL_TITLE` | "Excel Handler" | computed |
/// | `DESCRIPTION` | "Reads Excel files." | description |
/// | `CATEGORY` | "data-processing" | category, or empty |
/// | `VERSION` | "1.0.0" | configuration |
/// | `FRONTMATTER` | `---\nname: ...\n---` | computed |
/// | `USER_GUIDELINES_SECTION` | `\n## User Guidelines\n\n- ...` | user guidelines, or empty |
#[derive(Debug, Clone)]
pub struct RenderContext {
    skill_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Derive every built-in variable from a validated request.
    pub fn new(request: &ValidatedRequest, version: &str) -> Result<Self, DomainError> {
        let frontmatter = Frontmatter::from_request(request, version).to_block()?;

        let mut variables = HashMap::new();
        variables.insert("FRONTMATTER".into(), frontmatter);
        variables.insert("SKILL_NAME".into(), request.name().to_string());
        variables.insert("SKILL_TITLE".into(), request.name().title());
        variables.insert("DESCRIPTION".into(), request.description().to_string());
        variables.insert(
            "CATEGORY".into(),
            request
                .category()
                .map(|c| c.to_string())
                .unwrap_or_default(),
        );
        variables.insert("VERSION".into(), version.to_string());
        variables.insert(
            "USER_GUIDELINES_SECTION".into(),
            user_guidelines_section(request.user_guidelines()),
        );

        Ok(Self {
            skill_name: request.name().to_string(),
            variables,
        })
    }

    pub fn skill_name(&self) -> &str {
        &self.skill_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Substitute `{{KEY}}` placeholders in `template`.
    ///
    /// One left-to-right scan over the template: substituted values are never
    /// rescanned, so a description containing `{{...}}` comes out verbatim.
    /// A `{{` without a closing `}}` is copied as-is.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return Ok(out);
            };

            let key = after_open[..end].trim();
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(DomainError::UnknownPlaceholder {
                        name: key.to_string(),
                    });
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// A blank line, `## User Guidelines` and one bullet per rule; or nothing at all.
///
/// The leading newline lets a skeleton place the variable directly after its
/// last line without leaving a trailing blank line when there are no rules.
fn user_guidelines_section(guidelines: &[String]) -> String {
    if guidelines.is_empty() {
        return String::new();
    }

    let mut section = String::from("\n## User Guidelines\n\n");
    for rule in guidelines {
        section.push_str("- ");
        section.push_str(rule);
        section.push('\n');
    }
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::request::PackageRequest;

    fn context(request: PackageRequest) -> RenderContext {
        RenderContext::new(&request.validate().unwrap(), DEFAULT_VERSION).unwrap()
    }

    #[test]
    fn standard_variables() {
        let ctx = context(PackageRequest::new("excel-handler", "Reads Excel files."));

        assert_eq!(ctx.get("SKILL_NAME"), Some("excel-handler"));
        assert_eq!(ctx.get("SKILL_TITLE"), Some("Excel Handler"));
        assert_eq!(ctx.get("DESCRIPTION"), Some("Reads Excel files."));
        assert_eq!(ctx.get("CATEGORY"), Some(""));
        assert_eq!(ctx.get("VERSION"), Some("1.0.0"));
        assert_eq!(ctx.get("USER_GUIDELINES_SECTION"), Some(""));
    }

    #[test]
    fn user_guidelines_render_as_bullets() {
        let ctx = context(
            PackageRequest::new("pdf-tools", "Handles PDFs.")
                .with_guideline("Never modify originals")
                .with_guideline("Ask before deleting"),
        );

        assert_eq!(
            ctx.get("USER_GUIDELINES_SECTION"),
            Some("\n## User Guidelines\n\n- Never modify originals\n- Ask before deleting\n")
        );
    }

    #[test]
    fn render_substitutes_known_placeholders() {
        let ctx = context(PackageRequest::new("api-v2", "Calls the API."));
        let out = ctx.render("# {{SKILL_TITLE}}\n\n{{ DESCRIPTION }}").unwrap();
        assert_eq!(out, "# Api V2\n\nCalls the API.");
    }

    #[test]
    fn render_does_not_rescan_substituted_values() {
        let ctx = context(PackageRequest::new("echo", "Prints {{SKILL_NAME}} literally."));
        let out = ctx.render("{{DESCRIPTION}}").unwrap();
        assert_eq!(out, "Prints {{SKILL_NAME}} literally.");
    }

    #[test]
    fn render_rejects_unknown_placeholder() {
        let ctx = context(PackageRequest::new("echo", "Echoes."));
        assert_eq!(
            ctx.render("{{AUTHOR}}"),
            Err(DomainError::UnknownPlaceholder {
                name: "AUTHOR".into()
            })
        );
    }

    #[test]
    fn render_keeps_unterminated_braces() {
        let ctx = context(PackageRequest::new("echo", "Echoes."));
        assert_eq!(ctx.render("a {{ b").unwrap(), "a {{ b");
    }

    #[test]
    fn custom_variables_override() {
        let ctx = context(PackageRequest::new("echo", "Echoes.")).with_variable("VERSION", "2.0.0");
        assert_eq!(ctx.render("v{{VERSION}}").unwrap(), "v2.0.0");
    }

    #[test]
    fn placeholders_for_filters_by_directory() {
        let template = SkillTemplate::new(TemplateSource::Static("x"))
            .with_placeholder(PlaceholderFile::new(
                Subdirectory::Scripts,
                ".gitkeep",
                TemplateSource::Static(""),
            ))
            .with_placeholder(PlaceholderFile::new(
                Subdirectory::Examples,
                "README.md",
                TemplateSource::Static("# {{SKILL_NAME}}"),
            ));

        assert_eq!(template.placeholders_for(Subdirectory::Scripts).count(), 1);
        assert_eq!(template.placeholders_for(Subdirectory::Assets).count(), 0);
    }
}
