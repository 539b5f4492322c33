//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire build workflow:
//! 1. Validate the request
//! 2. Render the template with the request's context
//! 3. Claim the package root and write every entry, rolling back on failure
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateProvider, TemplateRenderer},
    },
    domain::{
        BuildState, DEFAULT_VERSION, DomainError, DomainValidator, FsEntry, Frontmatter,
        PRIMARY_FILE, PackageLayout, PackageRequest, RenderContext, Subdirectory,
        ValidatedRequest,
    },
    error::{SkillError, SkillResult},
};

/// Knobs that shape the rendered layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Subdirectories created under the package root, in order.
    pub subdirectories: Vec<Subdirectory>,
    /// Write the template's placeholder files into their subdirectories.
    pub placeholders: bool,
    /// Version recorded in the frontmatter.
    pub version: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            subdirectories: Subdirectory::DEFAULT.to_vec(),
            placeholders: false,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl BuildOptions {
    /// Add a subdirectory unless it is already part of the set.
    pub fn with_subdirectory(mut self, directory: Subdirectory) -> Self {
        if !self.subdirectories.contains(&directory) {
            self.subdirectories.push(directory);
        }
        self
    }

    pub fn with_placeholders(mut self, placeholders: bool) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Result of a committed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// The package root (`parent / identifier`).
    pub root: PathBuf,
    /// Every path created, root first, in creation order.
    pub created: Vec<PathBuf>,
    /// Always `BuildState::Committed` for a returned report.
    pub state: BuildState,
}

/// Main scaffolding service.
///
/// Holds no per-build state; concurrent builds only meet at the filesystem.
pub struct ScaffoldService {
    templates: Box<dyn TemplateProvider>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use skillsmith_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     templates,  // impl TemplateProvider
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        templates: Box<dyn TemplateProvider>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Run the validator without touching any port.
    pub fn validate(&self, request: &PackageRequest) -> SkillResult<ValidatedRequest> {
        Ok(DomainValidator::validate(request)?)
    }

    /// Render the layout a build would write, without writing anything.
    ///
    /// Fails with `PackageAlreadyExists` when the build would collide.
    #[instrument(skip_all, fields(identifier = %request.identifier))]
    pub fn plan(
        &self,
        request: &PackageRequest,
        parent: &Path,
        options: &BuildOptions,
    ) -> SkillResult<PackageLayout> {
        let layout = self.render(request, parent, options)?;

        if self.filesystem.exists(layout.root()) {
            return Err(ApplicationError::PackageAlreadyExists {
                path: layout.root().to_path_buf(),
            }
            .into());
        }

        Ok(layout)
    }

    /// Build a skill package under `parent`.
    ///
    /// Either every planned path exists afterwards, or nothing this call
    /// created remains.
    #[instrument(
        skip_all,
        fields(
            identifier = %request.identifier,
            parent = %parent.display()
        )
    )]
    pub fn build(
        &self,
        request: &PackageRequest,
        parent: &Path,
        options: &BuildOptions,
    ) -> SkillResult<BuildReport> {
        let mut state = StateTracker::new();
        state.advance(BuildState::Validating);

        let layout = match self.render(request, parent, options).and_then(|layout| {
            self.claim_root(parent, layout.root())?;
            Ok(layout)
        }) {
            Ok(layout) => layout,
            Err(e) => {
                state.advance(BuildState::Rejected);
                info!(error = %e, "Build rejected");
                return Err(e);
            }
        };

        state.advance(BuildState::Creating);

        match self.write_entries(&layout) {
            Ok(created) => {
                state.advance(BuildState::Committed);
                info!(paths = created.len(), "Skill package created");
                Ok(BuildReport {
                    root: layout.root().to_path_buf(),
                    created,
                    state: state.finish(),
                })
            }
            Err(cause) => {
                warn!(error = %cause, "Write failed, rolling back");
                let err = self.rollback(layout.root(), cause);
                state.advance(BuildState::RolledBack);
                Err(err)
            }
        }
    }

    /// Inspect an existing package directory.
    ///
    /// Reads `SKILL.md`, parses its frontmatter, applies the request rules to
    /// the stored name and description, and requires the name to match the
    /// directory name.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn check(&self, dir: &Path) -> SkillResult<Frontmatter> {
        let primary = dir.join(PRIMARY_FILE);
        if !self.filesystem.exists(&primary) {
            return Err(ApplicationError::MissingPrimaryFile {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let content = self.filesystem.read_file(&primary)?;
        let (frontmatter, _body) = Frontmatter::parse(&content)?;
        frontmatter.validate()?;

        let directory = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if frontmatter.name != directory {
            return Err(DomainError::NameMismatch {
                name: frontmatter.name.clone(),
                directory,
            }
            .into());
        }

        debug!(name = %frontmatter.name, "Package checks passed");
        Ok(frontmatter)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate, then render the template into a layout under `parent`.
    fn render(
        &self,
        request: &PackageRequest,
        parent: &Path,
        options: &BuildOptions,
    ) -> SkillResult<PackageLayout> {
        let validated = self.validate(request)?;
        let root = parent.join(validated.name().as_str());

        let template = self.templates.template()?;
        let context = RenderContext::new(&validated, &options.version)?;
        let layout = self.renderer.render(&template, &context, &root, options)?;
        DomainValidator::validate_layout(&layout)?;

        debug!(entries = layout.entry_count(), "Template rendered");
        Ok(layout)
    }

    /// Make sure `parent` exists, then atomically create `root`.
    ///
    /// Losing the race against a concurrent build surfaces as
    /// `PackageAlreadyExists`, the same as a pre-existing package.
    fn claim_root(&self, parent: &Path, root: &Path) -> SkillResult<()> {
        let already_exists = || -> SkillError {
            ApplicationError::PackageAlreadyExists {
                path: root.to_path_buf(),
            }
            .into()
        };

        if self.filesystem.exists(root) {
            return Err(already_exists());
        }

        if !parent.as_os_str().is_empty() && !self.filesystem.exists(parent) {
            debug!(path = %parent.display(), "Creating output directory");
            self.filesystem.create_dir_all(parent)?;
        }

        match self.filesystem.create_dir(root) {
            Ok(()) => Ok(()),
            Err(SkillError::Application(ApplicationError::PathExists { .. })) => {
                Err(already_exists())
            }
            Err(e) => Err(e),
        }
    }

    /// Write every entry below an already claimed root.
    fn write_entries(&self, layout: &PackageLayout) -> SkillResult<Vec<PathBuf>> {
        let root = layout.root();
        let mut created = vec![root.to_path_buf()];

        for entry in layout.entries() {
            let path = root.join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(dir) = path.parent().filter(|d| *d != root) {
                        self.filesystem.create_dir_all(dir)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
            debug!(path = %path.display(), "Created");
            created.push(path);
        }

        Ok(created)
    }

    /// Remove a root this build created and wrap the original failure.
    fn rollback(&self, root: &Path, cause: SkillError) -> SkillError {
        match self.filesystem.remove_dir_all(root) {
            Ok(()) => {
                info!(path = %root.display(), "Rollback successful");
                ApplicationError::RolledBack {
                    path: root.to_path_buf(),
                    cause: Box::new(cause),
                }
                .into()
            }
            Err(e) => {
                warn!(error = %e, path = %root.display(), "Rollback failed");
                ApplicationError::RollbackFailed {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                    cause: Box::new(cause),
                }
                .into()
            }
        }
    }
}

/// Tracks one invocation's walk through `BuildState`.
struct StateTracker {
    current: BuildState,
}

impl StateTracker {
    fn new() -> Self {
        Self {
            current: BuildState::Pending,
        }
    }

    fn advance(&mut self, next: BuildState) {
        debug_assert!(
            self.current.can_transition_to(next),
            "illegal build transition {} -> {}",
            self.current,
            next
        );
        debug!(from = %self.current, to = %next, "Build state");
        self.current = next;
    }

    fn finish(self) -> BuildState {
        debug_assert!(self.current.is_terminal(), "build ended in {}", self.current);
        self.current
    }
}
