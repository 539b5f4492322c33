//! The skeleton that ships with Skillsmith.
//!
//! Everything here is static payload. Values reach it only through the
//! `{{VARIABLE}}` placeholders listed in `skillsmith_core::domain::PLACEHOLDERS`.

use skillsmith_core::{
    application::ports::TemplateProvider,
    domain::{PlaceholderFile, SkillTemplate, Subdirectory, TemplateSource},
    error::SkillResult,
};

/// `SKILL.md` skeleton.
pub const PRIMARY: &str = r#"{{FRONTMATTER}}

# {{SKILL_TITLE}}

{{DESCRIPTION}}

## Instructions

When the user asks for this capability, follow these steps:

1. **Step one**:
   - Describe the sub-step
   - State the condition to verify

2. **Step two**:
   - Describe the sub-step

## Examples

**User:** An example request

**Agent:** An example response

## Guidelines

- Keep this file focused on instructions; move long reference material to `references/`
- Put reusable helpers in `scripts/` and call them from the steps above
- Prefer concrete examples over abstract descriptions
{{USER_GUIDELINES_SECTION}}"#;

/// `scripts/.gitkeep`
pub const SCRIPTS_GITKEEP: &str = "# Add helper scripts here\n";

/// `examples/README.md`
pub const EXAMPLES_README: &str = r#"# {{SKILL_NAME}} Examples

This directory holds usage examples for the `{{SKILL_NAME}}` skill.

## Examples

- Add your example files

## How to use

1. Read an example file
2. Adjust its parameters to your case
3. See SKILL.md for the full instructions
"#;

/// Placeholder files offered by every template.
pub fn placeholder_files() -> Vec<PlaceholderFile> {
    vec![
        PlaceholderFile::new(
            Subdirectory::Scripts,
            ".gitkeep",
            TemplateSource::Static(SCRIPTS_GITKEEP),
        ),
        PlaceholderFile::new(
            Subdirectory::Examples,
            "README.md",
            TemplateSource::Static(EXAMPLES_README),
        ),
    ]
}

/// Compiled-in template provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateProvider for BuiltinTemplates {
    fn template(&self) -> SkillResult<SkillTemplate> {
        Ok(placeholder_files().into_iter().fold(
            SkillTemplate::new(TemplateSource::Static(PRIMARY)),
            SkillTemplate::with_placeholder,
        ))
    }
}
