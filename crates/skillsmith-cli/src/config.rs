//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate only ever sees the [`BuildOptions`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SKILLSMITH__SCAFFOLD__VERSION=2.0.0`,
//!    `SKILLSMITH__SCAFFOLD__SUBDIRECTORIES=scripts,references`
//! 3. Config file: `--config FILE`, otherwise `.skillsmith.toml` in the
//!    current directory layered over the platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use skillsmith_core::{
    application::BuildOptions,
    domain::{DEFAULT_VERSION, Subdirectory},
};

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG: &str = ".skillsmith.toml";

const ENV_PREFIX: &str = "SKILLSMITH";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shape of generated packages.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub subdirectories: Vec<Subdirectory>,
    pub placeholders: bool,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// User skeleton for `SKILL.md`; the built-in one is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_path: Option<PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            subdirectories: Subdirectory::DEFAULT.to_vec(),
            placeholders: false,
            version: DEFAULT_VERSION.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the platform file and `.skillsmith.toml` are read
    /// when present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&AppConfig::default()).context("Failed to encode defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                for path in [Self::config_path(), PathBuf::from(LOCAL_CONFIG)] {
                    builder = builder.add_source(
                        File::from(path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scaffold.subdirectories")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.skillsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "skillsmith", "skillsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The file that configuration was most specifically read from.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        match config_file {
            Some(path) => path.to_path_buf(),
            None if Path::new(LOCAL_CONFIG).exists() => PathBuf::from(LOCAL_CONFIG),
            None => Self::config_path(),
        }
    }

    /// Build options for the core, before command-line overrides.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            subdirectories: self.scaffold.subdirectories.clone(),
            placeholders: self.scaffold.placeholders,
            version: self.scaffold.version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.build_options(), BuildOptions::default());
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.primary_path.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[scaffold]\nsubdirectories = [\"scripts\", \"references\"]\nplaceholders = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            cfg.scaffold.subdirectories,
            vec![Subdirectory::Scripts, Subdirectory::References]
        );
        assert!(cfg.scaffold.placeholders);
        assert_eq!(cfg.scaffold.version, DEFAULT_VERSION);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/no/such/skillsmith.toml"))).is_err());
    }

    #[test]
    fn unknown_subdirectory_in_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[scaffold]\nsubdirectories = [\"src\"]\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
