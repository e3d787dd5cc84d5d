//! Configuration file support for release-radar.
//!
//! Provides YAML-based configuration through `release-radar.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use release_radar::shared::Result;

pub const CONFIG_FILENAME: &str = "release-radar.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub export: Option<PathBuf>,
    pub mapping: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub show_all: Option<bool>,
    pub closest: Option<usize>,
    pub no_version_filter: Option<bool>,
    /// Extra abbreviations for the version filter: ABBR -> suite-name fragment
    pub abbreviations: Option<BTreeMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.closest == Some(0) {
        bail!(
            "Invalid config: closest must be at least 1.\n\n\
             💡 Hint: Set 'closest' to the number of upcoming releases to report per product."
        );
    }

    if let Some(format) = &config.format {
        if let Err(e) = format.parse::<release_radar::application::dto::OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(abbreviations) = &config.abbreviations {
        for (abbreviation, fragment) in abbreviations {
            if abbreviation.trim().is_empty() || fragment.trim().is_empty() {
                bail!(
                    "Invalid config: abbreviations entry '{}' must have a non-empty name and suite fragment.\n\n\
                     💡 Hint: Use entries like `RHEL: Red Hat Enterprise Linux`.",
                    abbreviation
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
