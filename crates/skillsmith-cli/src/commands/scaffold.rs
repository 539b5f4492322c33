//! The default invocation: build a skill package.
//!
//! Responsibility: turn [`ScaffoldArgs`] into a [`PackageRequest`] and
//! [`BuildOptions`], call the core scaffold service, and display results.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use skillsmith_adapters::{LocalFilesystem, SimpleRenderer, templates};
use skillsmith_core::{
    application::{BuildOptions, BuildReport, ScaffoldService},
    domain::{FsEntry, PRIMARY_FILE, PackageLayout, PackageRequest},
};

use crate::{
    cli::ScaffoldArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, TreeEntry},
};

/// Execute the default scaffold invocation.
///
/// 1. Collect the request (flags, or prompts with `--interactive`)
/// 2. Merge configured build options with `--with` / `--placeholders`
/// 3. `--dry-run`: render and print the layout, write nothing
/// 4. Otherwise build, then print the tree summary and next steps
#[instrument(skip_all, fields(output = %args.output_dir().display()))]
pub fn execute(args: ScaffoldArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = if args.interactive {
        prompt::request(&args)?
    } else {
        request_from_args(&args)?
    };
    let options = build_options(&args, config);

    debug!(
        identifier = %request.identifier,
        subdirectories = ?options.subdirectories,
        placeholders = options.placeholders,
        "Request assembled"
    );

    let service = service(config);

    if args.dry_run {
        let layout = service.plan(&request, args.output_dir(), &options)?;
        return show_plan(&layout, output);
    }

    info!(identifier = %request.identifier, "Building skill package");
    let report = service.build(&request, args.output_dir(), &options)?;
    show_report(&request.identifier, &report, output)
}

/// Wire the core service to the local filesystem and configured templates.
fn service(config: &AppConfig) -> ScaffoldService {
    ScaffoldService::new(
        templates::provider(config.templates.primary_path.as_deref()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn request_from_args(args: &ScaffoldArgs) -> CliResult<PackageRequest> {
    let name = args.name.clone().ok_or_else(|| CliError::InvalidInput {
        message: "--name is required".into(),
    })?;
    let description = args.description.clone().ok_or_else(|| CliError::InvalidInput {
        message: "--description is required".into(),
    })?;

    let mut request =
        PackageRequest::new(name, description).with_guidelines(args.guidelines.clone());
    if let Some(category) = &args.category {
        request = request.with_category(category.as_str());
    }
    Ok(request)
}

fn build_options(args: &ScaffoldArgs, config: &AppConfig) -> BuildOptions {
    let options = args
        .with
        .iter()
        .fold(config.build_options(), |options, dir| {
            options.with_subdirectory(*dir)
        });
    if args.placeholders {
        options.with_placeholders(true)
    } else {
        options
    }
}

// ── rendering ─────────────────────────────────────────────────────────────────

fn show_plan(layout: &PackageLayout, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({
            "status": "planned",
            "root": layout.root(),
            "paths": layout.planned_paths(),
        }))?;
        return Ok(());
    }

    output.info(&format!("Dry run: would create {}", layout.root().display()))?;
    let entries: Vec<TreeEntry<'_>> = layout
        .entries()
        .iter()
        .map(|entry| TreeEntry {
            path: entry.path(),
            is_dir: matches!(entry, FsEntry::Directory(_)),
        })
        .collect();
    output.tree(&root_label(layout.root()), &entries)?;
    Ok(())
}

fn show_report(identifier: &str, report: &BuildReport, output: &OutputManager) -> CliResult<()> {
    let location = std::path::absolute(&report.root).unwrap_or_else(|_| report.root.clone());

    if output.is_json() {
        output.json(&json!({
            "status": "created",
            "name": identifier,
            "root": location,
            "state": report.state.to_string(),
            "created": report.created,
        }))?;
        return Ok(());
    }

    output.success(&format!("Created skill package '{identifier}'"))?;

    let relative: Vec<(PathBuf, bool)> = report
        .created
        .iter()
        .filter_map(|path| {
            let rel = path.strip_prefix(&report.root).ok()?;
            (!rel.as_os_str().is_empty()).then(|| (rel.to_path_buf(), path.is_dir()))
        })
        .collect();
    let entries: Vec<TreeEntry<'_>> = relative
        .iter()
        .map(|(path, is_dir)| TreeEntry {
            path,
            is_dir: *is_dir,
        })
        .collect();
    output.tree(&root_label(&report.root), &entries)?;

    output.print("")?;
    output.print(&format!("Location: {}", location.display()))?;
    output.print("")?;
    output.header("Next steps:")?;
    for step in next_steps(&report.root) {
        output.print(&format!("  {step}"))?;
    }
    Ok(())
}

fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

fn next_steps(root: &Path) -> Vec<String> {
    vec![
        format!(
            "1. Edit {} and replace the placeholder instructions",
            root.join(PRIMARY_FILE).display()
        ),
        "2. Add helper scripts and worked examples to the subdirectories".into(),
        format!("3. Run `skillsmith check {}` when you are done", root.display()),
    ]
}

// ── interactive prompts ───────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
mod prompt {
    use dialoguer::{Confirm, FuzzySelect, Input, theme::ColorfulTheme};

    use skillsmith_core::domain::{Category, DomainValidator, PackageRequest};

    use crate::{
        cli::ScaffoldArgs,
        error::{CliError, CliResult},
    };

    /// Ask for each field, re-prompting until the validator accepts it.
    pub fn request(args: &ScaffoldArgs) -> CliResult<PackageRequest> {
        let theme = ColorfulTheme::default();

        let name: String = Input::with_theme(&theme)
            .with_prompt("Skill name")
            .with_initial_text(args.name.clone().unwrap_or_default())
            .validate_with(|input: &String| {
                DomainValidator::validate_identifier(input).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let description: String = Input::with_theme(&theme)
            .with_prompt("Description")
            .with_initial_text(args.description.clone().unwrap_or_default())
            .validate_with(|input: &String| {
                DomainValidator::validate_description(input).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let category = match &args.category {
            Some(label) => Some(Category::from(label.as_str())),
            None => {
                let mut items = vec!["(none)".to_string()];
                items.extend(
                    Category::SUGGESTED
                        .iter()
                        .map(|c| format!("{:<16} {}", c.as_str(), c.summary())),
                );
                let choice = FuzzySelect::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&items)
                    .default(0)
                    .interact()?;
                choice
                    .checked_sub(1)
                    .and_then(|i| Category::SUGGESTED.get(i).cloned())
            }
        };

        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(format!("Create '{name}' in {}?", args.output_dir().display()))
            .default(true)
            .interact()?;
        if !confirmed {
            return Err(CliError::Cancelled);
        }

        let mut request =
            PackageRequest::new(name, description).with_guidelines(args.guidelines.clone());
        request.category = category;
        Ok(request)
    }
}

#[cfg(not(feature = "interactive"))]
mod prompt {
    use skillsmith_core::domain::PackageRequest;

    use crate::{
        cli::ScaffoldArgs,
        error::{CliError, CliResult},
    };

    pub fn request(_args: &ScaffoldArgs) -> CliResult<PackageRequest> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use skillsmith_core::domain::{Category, Subdirectory};

    use super::*;

    fn args(name: &str, description: &str) -> ScaffoldArgs {
        ScaffoldArgs {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    #[test]
    fn request_carries_category_and_guidelines() {
        let mut a = args("pdf-tools", "Handles PDFs");
        a.category = Some("file-management".into());
        a.guidelines = vec!["Never modify originals".into()];

        let request = request_from_args(&a).unwrap();
        assert_eq!(request.identifier, "pdf-tools");
        assert_eq!(request.category, Some(Category::FileManagement));
        assert_eq!(request.user_guidelines, vec!["Never modify originals"]);
    }

    #[test]
    fn request_is_not_validated_here() {
        let request = request_from_args(&args("Bad_Name", "x")).unwrap();
        assert_eq!(request.identifier, "Bad_Name");
    }

    #[test]
    fn missing_name_is_invalid_input() {
        let mut a = args("x", "y");
        a.name = None;
        assert!(matches!(
            request_from_args(&a),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn options_merge_flags_over_config() {
        let mut a = args("x", "y");
        a.with = vec![Subdirectory::References, Subdirectory::Scripts];
        a.placeholders = true;

        let options = build_options(&a, &AppConfig::default());
        assert_eq!(
            options.subdirectories,
            vec![
                Subdirectory::Scripts,
                Subdirectory::Examples,
                Subdirectory::References
            ]
        );
        assert!(options.placeholders);
    }

    #[test]
    fn options_default_to_config() {
        let mut config = AppConfig::default();
        config.scaffold.version = "2.0.0".into();
        let options = build_options(&args("x", "y"), &config);
        assert_eq!(options.version, "2.0.0");
        assert!(!options.placeholders);
    }

    #[test]
    fn root_label_is_the_directory_name() {
        assert_eq!(root_label(Path::new("./skills/excel-handler")), "excel-handler");
    }

    #[test]
    fn next_steps_point_at_check() {
        let steps = next_steps(Path::new("skills/excel-handler"));
        assert!(steps[2].contains("skillsmith check skills/excel-handler"));
    }
}
