//! `skillsmith categories`: list the suggested categories.

use serde_json::json;

use skillsmith_core::domain::Category;

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let list: Vec<_> = Category::SUGGESTED
            .iter()
            .map(|c| json!({ "name": c.as_str(), "summary": c.summary() }))
            .collect();
        output.json(&json!(list))?;
        return Ok(());
    }

    output.header("Suggested categories:")?;
    for category in &Category::SUGGESTED {
        output.print(&format!("  {:<16} {}", category.as_str(), category.summary()))?;
    }
    output.print("")?;
    output.info("Any other label is accepted as a custom category.")?;
    Ok(())
}
