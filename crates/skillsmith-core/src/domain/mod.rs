// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Skillsmith.
//!
//! This module contains pure logic with no I/O. Filesystem access and
//! template loading are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Only the application layer emits tracing events
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Validation by construction**: `ValidatedRequest` only comes out of
//!   `DomainValidator`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod frontmatter;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    build_state::BuildState,
    package_layout::{DirectoryToCreate, FileToWrite, FsEntry, PackageLayout},
    request::{PackageRequest, ValidatedRequest},
    template::{
        DEFAULT_VERSION, PLACEHOLDERS, PRIMARY_FILE, PlaceholderFile, RenderContext,
        SkillTemplate, TemplateSource,
    },
};

pub use error::{DescriptionViolation, DomainError, IdentifierViolation};
pub use frontmatter::Frontmatter;

pub use value_objects::{Category, Description, SkillName, Subdirectory};

pub use validation::{DomainValidator, MAX_DESCRIPTION_LENGTH, MAX_IDENTIFIER_LENGTH};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn category_parses_suggested_labels() {
        assert_eq!(
            Category::from_str("data-processing").unwrap(),
            Category::DataProcessing
        );
        assert_eq!(Category::from_str("devops").unwrap(), Category::DevOps);
        for category in Category::SUGGESTED {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
            assert!(category.is_suggested());
        }
    }

    #[test]
    fn category_keeps_unknown_labels() {
        let category = Category::from("machine-learning");
        assert_eq!(category, Category::Custom("machine-learning".into()));
        assert_eq!(category.to_string(), "machine-learning");
        assert!(!category.is_suggested());
    }

    #[test]
    fn subdirectory_parses_and_displays() {
        assert_eq!(
            Subdirectory::from_str("References").unwrap(),
            Subdirectory::References
        );
        assert!(Subdirectory::from_str("src").is_err());
        assert_eq!(Subdirectory::Assets.to_string(), "assets");
    }

    #[test]
    fn default_subdirectories_are_scripts_and_examples() {
        assert_eq!(
            Subdirectory::DEFAULT,
            [Subdirectory::Scripts, Subdirectory::Examples]
        );
    }

    #[test]
    fn skill_name_title_case() {
        let valid = PackageRequest::new("excel-handler", "x").validate().unwrap();
        assert_eq!(valid.name().title(), "Excel Handler");

        let valid = PackageRequest::new("a--b-", "x").validate().unwrap();
        assert_eq!(valid.name().title(), "A B");
    }

    // ========================================================================
    // End-to-end validation scenarios
    // ========================================================================

    #[test]
    fn uppercase_and_underscore_identifier_is_rejected() {
        let request = PackageRequest::new("Excel_Handler", "...");
        assert!(matches!(
            DomainValidator::validate(&request),
            Err(DomainError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn tag_in_description_is_rejected_even_with_valid_identifier() {
        let request = PackageRequest::new("api-v2", "Calls <api> endpoint");
        assert!(matches!(
            DomainValidator::validate(&request),
            Err(DomainError::InvalidDescription {
                violation: DescriptionViolation::ContainsTag { .. }
            })
        ));
    }

    #[test]
    fn unknown_category_does_not_fail_validation() {
        let request = PackageRequest::new("x", "y").with_category("not-in-the-list");
        assert!(DomainValidator::validate(&request).is_ok());
    }

    #[test]
    fn suggestions_name_the_disallowed_character() {
        let err = DomainValidator::validate(&PackageRequest::new("my_skill", "x")).unwrap_err();
        assert!(err.suggestions().iter().any(|s| s.contains("'_'")));
    }

    // ========================================================================
    // Package Layout Tests
    // ========================================================================

    #[test]
    fn layout_builds_correctly() {
        let layout = PackageLayout::new("/tmp/skills/demo")
            .with_directory("scripts")
            .with_file(PRIMARY_FILE, "---\n".into());

        assert_eq!(layout.entry_count(), 2);
        assert_eq!(layout.files().count(), 1);
        assert_eq!(layout.directories().count(), 1);
        assert!(layout.file(PRIMARY_FILE).is_some());
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn layout_planned_paths_start_at_root() {
        let layout = PackageLayout::new("/tmp/skills/demo").with_directory("scripts");
        let paths = layout.planned_paths();
        assert_eq!(paths[0], std::path::PathBuf::from("/tmp/skills/demo"));
        assert_eq!(paths[1], std::path::PathBuf::from("/tmp/skills/demo/scripts"));
    }

    #[test]
    fn layout_validates_duplicates() {
        let layout = PackageLayout::new("/tmp/test")
            .with_file("SKILL.md", "".into())
            .with_file("SKILL.md", "".into());

        assert!(matches!(
            layout.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn layout_validates_empty() {
        let layout = PackageLayout::new("/tmp/test");
        assert_eq!(layout.validate(), Err(DomainError::EmptyLayout));
    }

    #[test]
    fn layout_rejects_absolute_entries() {
        let layout = PackageLayout::new("/tmp/test").with_directory("/etc");
        assert!(matches!(
            DomainValidator::validate_layout(&layout),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
