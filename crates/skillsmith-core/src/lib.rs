//! Skillsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Skillsmith
//! skill package generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          skillsmith-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │    build / plan / check / validate      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateProvider, Render)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    skillsmith-adapters (Infrastructure) │
//! │ (LocalFilesystem, BuiltinTemplates, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (PackageRequest, Validator, Layout, ..) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use skillsmith_core::prelude::*;
//!
//! let request = PackageRequest::new("pdf-tools", "Extracts text from PDF files.")
//!     .with_category("file-management");
//!
//! let service = ScaffoldService::new(templates, renderer, filesystem);
//! let report = service.build(&request, Path::new("./skills"), &BuildOptions::default())?;
//! for path in &report.created {
//!     println!("{}", path.display());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildOptions, BuildReport, ScaffoldService,
        ports::{Filesystem, TemplateProvider, TemplateRenderer},
    };
    pub use crate::domain::{
        BuildState, Category, DomainValidator, Frontmatter, PackageLayout, PackageRequest,
        RenderContext, SkillTemplate, Subdirectory, ValidatedRequest,
    };
    pub use crate::error::{ErrorKind, SkillError, SkillResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
