//! Simple variable substitution renderer.

use std::path::Path;

use skillsmith_core::{
    application::{BuildOptions, ports::TemplateRenderer},
    domain::{DomainValidator, PRIMARY_FILE, PackageLayout, RenderContext, SkillTemplate},
    error::SkillResult,
};
use tracing::{instrument, trace};

/// Simple renderer using `{{VARIABLE}}` substitution.
///
/// Layout order: each configured subdirectory (followed by its placeholder
/// files when enabled), then `SKILL.md`.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(skill = %context.skill_name()))]
    fn render(
        &self,
        template: &SkillTemplate,
        context: &RenderContext,
        root: &Path,
        options: &BuildOptions,
    ) -> SkillResult<PackageLayout> {
        let mut layout = PackageLayout::new(root);

        for &directory in &options.subdirectories {
            layout.add_directory(directory.as_str());

            if options.placeholders {
                for file in template.placeholders_for(directory) {
                    let path = Path::new(directory.as_str()).join(file.file_name);
                    trace!(path = %path.display(), "Rendering placeholder");
                    layout.add_file(path, context.render(file.content.as_str())?);
                }
            }
        }

        layout.add_file(PRIMARY_FILE, context.render(template.primary.as_str())?);

        DomainValidator::validate_layout(&layout)?;
        Ok(layout)
    }
}
