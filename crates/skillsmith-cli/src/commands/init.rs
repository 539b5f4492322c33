//! `skillsmith init`: write a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults as TOML.
///
/// Refuses to replace an existing file unless `--force` is given.
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    let config_path = target(&args);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}

fn target(args: &InitArgs) -> PathBuf {
    if args.local {
        PathBuf::from(LOCAL_CONFIG)
    } else {
        AppConfig::config_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_writes_next_to_cwd() {
        let args = InitArgs {
            local: true,
            force: false,
        };
        assert_eq!(target(&args), PathBuf::from(".skillsmith.toml"));
    }

    #[test]
    fn default_goes_to_platform_dir() {
        let args = InitArgs {
            local: false,
            force: false,
        };
        assert_eq!(target(&args), AppConfig::config_path());
    }
}
