// src/config/loader.rs

use std::path::Path;

use tracing::{debug, warn};

use crate::config::model::{CommandSpec, ConfigFile, ConfigFormat, TomlConfigFile};
use crate::config::validate::validate_config;
use crate::errors::{PcmdError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// File read when no `--config` is given, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pcmd.yml";

/// Deserialize config text in the given format.
///
/// An empty (or `null`) YAML document is an empty command list.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<ConfigFile> {
    let commands = match format {
        ConfigFormat::Yaml => {
            if contents.trim().is_empty() {
                Vec::new()
            } else {
                serde_yaml::from_str::<Option<Vec<CommandSpec>>>(contents)?.unwrap_or_default()
            }
        }
        ConfigFormat::Toml => toml::from_str::<TomlConfigFile>(contents)?.commands,
    };

    Ok(ConfigFile { commands })
}

/// Load a configuration file through the given filesystem.
///
/// This only reads and deserializes; see [`load_and_validate`] for the
/// variant that also reports validation warnings.
pub fn load_with_fs(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs
        .read_to_string(path)
        .map_err(|err| PcmdError::ConfigRead {
            path: path.to_path_buf(),
            message: format!("{err:#}"),
        })?;

    let config = parse_config(&contents, ConfigFormat::from_path(path))?;
    debug!(path = ?path, commands = config.len(), "config loaded");
    Ok(config)
}

/// Load a configuration file from disk.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    load_with_fs(&RealFileSystem, path)
}

/// Load a configuration file from disk and log any validation warnings.
///
/// This is the entry point used by [`crate::run`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    load_and_validate_with_fs(&RealFileSystem, path)
}

pub fn load_and_validate_with_fs(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
) -> Result<ConfigFile> {
    let config = load_with_fs(fs, path)?;
    for warning in validate_config(&config) {
        warn!(%warning, "suspicious config entry");
    }
    Ok(config)
}
