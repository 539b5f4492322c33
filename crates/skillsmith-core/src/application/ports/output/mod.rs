//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `skillsmith-adapters` crate provides implementations.

use std::path::Path;

use crate::application::services::BuildOptions;
use crate::domain::{PackageLayout, RenderContext, SkillTemplate};
use crate::error::SkillResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skillsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `skillsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` is the collision guard: it must fail with
///   `ApplicationError::PathExists` when the path is already taken, and must
///   not create missing parents.
/// - Everything else reports failures as `ApplicationError::FilesystemError`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory, failing if it already exists.
    fn create_dir(&self, path: &Path) -> SkillResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SkillResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SkillResult<()>;

    /// Read a UTF-8 file.
    fn read_file(&self, path: &Path) -> SkillResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SkillResult<()>;
}

/// Port for template content.
///
/// Implemented by:
/// - `skillsmith_adapters::templates::BuiltinTemplates` (compiled-in skeleton)
/// - `skillsmith_adapters::templates::FileTemplates` (user skeleton file)
pub trait TemplateProvider: Send + Sync {
    /// The template every package is rendered from.
    fn template(&self) -> SkillResult<SkillTemplate>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `skillsmith_adapters::renderer::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template into a package layout rooted at `root`.
    ///
    /// # Arguments
    ///
    /// * `template` - The template to render
    /// * `context` - Variable substitution context
    /// * `root` - Package root; entry paths in the layout are relative to it
    /// * `options` - Subdirectory set and placeholder switch
    fn render(
        &self,
        template: &SkillTemplate,
        context: &RenderContext,
        root: &Path,
        options: &BuildOptions,
    ) -> SkillResult<PackageLayout>;
}
