//! User-supplied primary skeleton.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use skillsmith_core::{
    application::{ApplicationError, ports::TemplateProvider},
    domain::{SkillTemplate, TemplateSource},
    error::SkillResult,
};

use super::builtin;

/// Template provider reading `SKILL.md` text from a file.
///
/// The file uses the same `{{VARIABLE}}` placeholders as the built-in
/// skeleton and is re-read on every call. Placeholder files stay built-in.
#[derive(Debug, Clone)]
pub struct FileTemplates {
    primary: PathBuf,
}

impl FileTemplates {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.primary
    }
}

impl TemplateProvider for FileTemplates {
    #[instrument(skip_all, fields(path = %self.primary.display()))]
    fn template(&self) -> SkillResult<SkillTemplate> {
        let text = std::fs::read_to_string(&self.primary).map_err(|e| {
            ApplicationError::TemplateUnavailable {
                reason: format!("cannot read {}: {}", self.primary.display(), e),
            }
        })?;

        if text.trim().is_empty() {
            return Err(ApplicationError::TemplateUnavailable {
                reason: format!("{} is empty", self.primary.display()),
            }
            .into());
        }

        debug!(bytes = text.len(), "Loaded primary skeleton");

        Ok(builtin::placeholder_files().into_iter().fold(
            SkillTemplate::new(TemplateSource::Owned(text)),
            SkillTemplate::with_placeholder,
        ))
    }
}

#[cfg(test)]
mod tests {
    use skillsmith_core::error::SkillError;

    use super::*;

    #[test]
    fn reads_skeleton_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skeleton.md");
        std::fs::write(&path, "{{FRONTMATTER}}\n# {{SKILL_TITLE}}\n").unwrap();

        let template = FileTemplates::new(&path).template().unwrap();
        assert_eq!(template.primary.as_str(), "{{FRONTMATTER}}\n# {{SKILL_TITLE}}\n");
    }

    #[test]
    fn missing_file_is_template_unavailable() {
        let err = FileTemplates::new("/definitely/not/here.md")
            .template()
            .unwrap_err();
        assert!(matches!(
            err,
            SkillError::Application(ApplicationError::TemplateUnavailable { .. })
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skeleton.md");
        std::fs::write(&path, "  \n").unwrap();

        assert!(FileTemplates::new(&path).template().is_err());
    }
}
