//! `skillsmith config`: inspect configuration values.

use std::path::Path;

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&format!("{key} = {}", display(&value)))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&to_value(config)?)?;
            } else {
                let serialised = toml::to_string_pretty(config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_value(config: &AppConfig) -> CliResult<Value> {
    serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted key such as `scaffold.version`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = to_value(config)?;
    key.split('.')
        .try_fold(&root, |value, part| value.get(part))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_scalar_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "scaffold.version").unwrap();
        assert_eq!(display(&value), "1.0.0");
    }

    #[test]
    fn get_list_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "scaffold.subdirectories").unwrap();
        assert_eq!(display(&value), r#"["scripts","examples"]"#);
    }

    #[test]
    fn get_section_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "output").unwrap();
        assert_eq!(value["no_color"], false);
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn unset_template_path_is_unknown() {
        let cfg = AppConfig::default();
        assert!(get_config_value(&cfg, "templates.primary_path").is_err());
    }
}
