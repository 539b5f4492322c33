//! `PackageRequest` (raw input) and `ValidatedRequest` (proof of validation).
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{Category, Description, SkillName},
};

/// Raw, user-supplied fields for a new skill package.
///
/// Nothing here is checked on construction. Pass it through
/// [`PackageRequest::validate`] (or let the scaffold service do it) to obtain
/// a [`ValidatedRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageRequest {
    pub identifier: String,
    pub description: String,
    pub category: Option<Category>,
    pub user_guidelines: Vec<String>,
}

impl PackageRequest {
    pub fn new(identifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            category: None,
            user_guidelines: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_guidelines(mut self, guidelines: Vec<String>) -> Self {
        self.user_guidelines = guidelines;
        self
    }

    pub fn with_guideline(mut self, guideline: impl Into<String>) -> Self {
        self.user_guidelines.push(guideline.into());
        self
    }

    /// Shorthand for [`DomainValidator::validate`].
    pub fn validate(&self) -> Result<ValidatedRequest, DomainError> {
        DomainValidator::validate(self)
    }
}

/// A request whose identifier and description passed validation.
///
/// Only [`DomainValidator`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub(crate) name: SkillName,
    pub(crate) description: Description,
    pub(crate) category: Option<Category>,
    pub(crate) user_guidelines: Vec<String>,
}

impl ValidatedRequest {
    pub fn name(&self) -> &SkillName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn user_guidelines(&self) -> &[String] {
        &self.user_guidelines
    }
}
