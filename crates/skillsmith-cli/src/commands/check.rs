//! `skillsmith check`: validate an existing skill package.

use serde_json::json;
use tracing::instrument;

use skillsmith_adapters::{BuiltinTemplates, LocalFilesystem, SimpleRenderer};
use skillsmith_core::application::ScaffoldService;

use crate::{cli::CheckArgs, error::CliResult, output::OutputManager};

/// Read `SKILL.md` under `args.dir` and report its frontmatter.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: CheckArgs, output: &OutputManager) -> CliResult<()> {
    // `.` and `..` have no file name until resolved.
    let dir = args.dir.canonicalize().unwrap_or(args.dir);

    let service = ScaffoldService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let frontmatter = service.check(&dir)?;

    if output.is_json() {
        output.json(&json!({
            "status": "ok",
            "path": dir,
            "frontmatter": frontmatter,
        }))?;
        return Ok(());
    }

    output.success(&format!("'{}' is a valid skill package", frontmatter.name))?;
    output.print(&format!("  Description: {}", frontmatter.description))?;
    if let Some(version) = &frontmatter.version {
        output.print(&format!("  Version:     {version}"))?;
    }
    if let Some(category) = &frontmatter.category {
        if category.is_suggested() {
            output.print(&format!("  Category:    {category}"))?;
        } else {
            output.warning(&format!(
                "Category '{category}' is not one of the suggested categories"
            ))?;
        }
    }
    Ok(())
}
