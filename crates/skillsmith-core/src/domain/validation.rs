use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    entities::{PackageLayout, PackageRequest, ValidatedRequest},
    error::{DescriptionViolation, DomainError, IdentifierViolation},
    value_objects::{Description, SkillName},
};

/// Maximum identifier length, in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Anything shaped like `<...>`, including `<>` and unterminated markup that
/// closes later on. Deliberately not an HTML parser.
static TAG_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Centralized request validation.
///
/// Every check is a pure function over borrowed input, so callers may invoke
/// them as often as they like (e.g. on every keystroke of a prompt).
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a whole request: identifier first, then description.
    ///
    /// Returns the first violation found. Input is never trimmed or coerced.
    pub fn validate(request: &PackageRequest) -> Result<ValidatedRequest, DomainError> {
        Self::validate_identifier(&request.identifier)?;
        Self::validate_description(&request.description)?;

        Ok(ValidatedRequest {
            name: SkillName(request.identifier.clone()),
            description: Description(request.description.clone()),
            category: request.category.clone(),
            user_guidelines: request.user_guidelines.clone(),
        })
    }

    /// `^[a-z0-9-]+$`, 1 to 64 characters.
    pub fn validate_identifier(identifier: &str) -> Result<(), DomainError> {
        let fail = |violation| DomainError::InvalidIdentifier {
            identifier: identifier.to_string(),
            violation,
        };

        if identifier.is_empty() {
            return Err(fail(IdentifierViolation::Empty));
        }

        let length = identifier.chars().count();
        if length > MAX_IDENTIFIER_LENGTH {
            return Err(fail(IdentifierViolation::TooLong { length }));
        }

        if let Some((index, ch)) = identifier
            .chars()
            .enumerate()
            .find(|(_, c)| !is_identifier_char(*c))
        {
            return Err(fail(IdentifierViolation::DisallowedChar {
                ch,
                position: index + 1,
            }));
        }

        Ok(())
    }

    /// 1 to 1024 characters, no tag-shaped substring.
    pub fn validate_description(description: &str) -> Result<(), DomainError> {
        let fail = |violation| DomainError::InvalidDescription { violation };

        if description.is_empty() {
            return Err(fail(DescriptionViolation::Empty));
        }

        let length = description.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(fail(DescriptionViolation::TooLong { length }));
        }

        if let Some(tag) = TAG_LIKE.find(description) {
            return Err(fail(DescriptionViolation::ContainsTag {
                tag: tag.as_str().to_string(),
            }));
        }

        Ok(())
    }

    pub fn validate_layout(layout: &PackageLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier_violation(id: &str) -> IdentifierViolation {
        match DomainValidator::validate_identifier(id) {
            Err(DomainError::InvalidIdentifier { violation, .. }) => violation,
            other => panic!("expected InvalidIdentifier for {id:?}, got {other:?}"),
        }
    }

    fn description_violation(desc: &str) -> DescriptionViolation {
        match DomainValidator::validate_description(desc) {
            Err(DomainError::InvalidDescription { violation }) => violation,
            other => panic!("expected InvalidDescription for {desc:?}, got {other:?}"),
        }
    }

    // ── identifier ────────────────────────────────────────────────────────

    #[test]
    fn accepts_every_allowed_character() {
        for id in ["a", "0", "-", "excel-handler", "api-v2", "abcdefghijklmnopqrstuvwxyz0123456789-"] {
            assert!(DomainValidator::validate_identifier(id).is_ok(), "rejected {id:?}");
        }
    }

    #[test]
    fn accepts_exactly_max_length() {
        let id = "a".repeat(MAX_IDENTIFIER_LENGTH);
        assert!(DomainValidator::validate_identifier(&id).is_ok());
    }

    #[test]
    fn rejects_one_over_max_length() {
        let id = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert_eq!(
            identifier_violation(&id),
            IdentifierViolation::TooLong { length: 65 }
        );
    }

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(identifier_violation(""), IdentifierViolation::Empty);
    }

    #[test]
    fn reports_first_disallowed_character() {
        assert_eq!(
            identifier_violation("Excel_Handler"),
            IdentifierViolation::DisallowedChar { ch: 'E', position: 1 }
        );
        assert_eq!(
            identifier_violation("excel_handler"),
            IdentifierViolation::DisallowedChar { ch: '_', position: 6 }
        );
        assert_eq!(
            identifier_violation("excel handler"),
            IdentifierViolation::DisallowedChar { ch: ' ', position: 6 }
        );
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert!(matches!(
            identifier_violation("café"),
            IdentifierViolation::DisallowedChar { ch: 'é', .. }
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 64 two-byte chars: a byte count would report TooLong here.
        let id = "é".repeat(MAX_IDENTIFIER_LENGTH);
        assert!(matches!(
            identifier_violation(&id),
            IdentifierViolation::DisallowedChar { .. }
        ));
    }

    // ── description ───────────────────────────────────────────────────────

    #[test]
    fn accepts_plain_description() {
        assert!(DomainValidator::validate_description("Reads Excel files.").is_ok());
        assert!(DomainValidator::validate_description("use a > b, then b < c").is_ok());
    }

    #[test]
    fn rejects_empty_description() {
        assert_eq!(description_violation(""), DescriptionViolation::Empty);
    }

    #[test]
    fn accepts_exactly_max_description() {
        let desc = "x".repeat(MAX_DESCRIPTION_LENGTH);
        assert!(DomainValidator::validate_description(&desc).is_ok());
    }

    #[test]
    fn rejects_long_description() {
        let desc = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert_eq!(
            description_violation(&desc),
            DescriptionViolation::TooLong { length: 1025 }
        );
    }

    #[test]
    fn rejects_tag_like_substrings() {
        assert_eq!(
            description_violation("Calls <api> endpoint"),
            DescriptionViolation::ContainsTag { tag: "<api>".into() }
        );
        for desc in ["<b>bold</b>", "x <> y", "a < b then > c", "</close>", "<br/>"] {
            assert!(
                DomainValidator::validate_description(desc).is_err(),
                "accepted {desc:?}"
            );
        }
    }

    #[test]
    fn tag_check_spans_newlines() {
        assert!(DomainValidator::validate_description("open <\nclose >").is_err());
    }

    #[test]
    fn bare_angle_brackets_alone_are_fine() {
        assert!(DomainValidator::validate_description("x < y").is_ok());
        assert!(DomainValidator::validate_description("x > y").is_ok());
    }

    // ── request ───────────────────────────────────────────────────────────

    #[test]
    fn identifier_is_checked_before_description() {
        let request = PackageRequest::new("Bad Name", "<also bad>");
        assert!(matches!(
            DomainValidator::validate(&request),
            Err(DomainError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn validated_request_keeps_input_verbatim() {
        let request = PackageRequest::new("excel-handler", "  Reads Excel files.  ")
            .with_guidelines(vec!["Never write".into()]);
        let valid = DomainValidator::validate(&request).unwrap();
        assert_eq!(valid.name.as_str(), "excel-handler");
        assert_eq!(valid.description.as_str(), "  Reads Excel files.  ");
        assert_eq!(valid.user_guidelines, vec!["Never write".to_string()]);
    }

    #[test]
    fn validation_is_repeatable() {
        let request = PackageRequest::new("api-v2", "Calls <api> endpoint");
        let first = DomainValidator::validate(&request);
        let second = DomainValidator::validate(&request);
        assert_eq!(first, second);
    }
}
