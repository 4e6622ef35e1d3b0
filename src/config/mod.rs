// src/config/mod.rs

//! Configuration loading and validation for pcmd.
//!
//! - `model.rs`: the `{name, command}` list and its on-disk layouts.
//! - `loader.rs`: reading YAML/TOML through the [`crate::fs`] seam.
//! - `validate.rs`: non-fatal sanity checks.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    load_and_validate, load_and_validate_with_fs, load_from_path, load_with_fs, parse_config,
    DEFAULT_CONFIG_FILE,
};
pub use model::{CommandSpec, ConfigFile, ConfigFormat, TomlConfigFile};
pub use validate::{validate_config, ConfigWarning};
