//! Template providers.
//!
//! # Resolution
//!
//! 1. An explicit primary skeleton path (`templates.primary_path` in the CLI
//!    configuration) selects [`FileTemplates`].
//! 2. Otherwise the compiled-in [`BuiltinTemplates`] are used.

mod builtin;
mod file;

use std::path::Path;

use tracing::debug;

use skillsmith_core::application::ports::TemplateProvider;

pub use builtin::{BuiltinTemplates, EXAMPLES_README, PRIMARY, SCRIPTS_GITKEEP, placeholder_files};
pub use file::FileTemplates;

/// Pick the template provider for an optional user skeleton.
pub fn provider(primary_path: Option<&Path>) -> Box<dyn TemplateProvider> {
    match primary_path {
        Some(path) => {
            debug!(path = %path.display(), "Using user skeleton");
            Box::new(FileTemplates::new(path))
        }
        None => {
            debug!("Using built-in skeleton");
            Box::new(BuiltinTemplates::new())
        }
    }
}
