// src/config/model.rs

use std::path::Path;

use serde::Deserialize;

/// One configured command: a display name and the raw shell string to run.
///
/// ```yaml
/// - name: web
///   command: npm run dev
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandSpec {
    /// Label shown in the colored `[name]` prefix.
    pub name: String,

    /// Passed verbatim to the system shell, so pipes and redirection work.
    pub command: String,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Loaded configuration: the commands to fan out, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub commands: Vec<CommandSpec>,
}

impl ConfigFile {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// TOML layout, where a bare top-level array is not expressible:
///
/// ```toml
/// [[command]]
/// name = "web"
/// command = "npm run dev"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfigFile {
    #[serde(default, rename = "command")]
    pub commands: Vec<CommandSpec>,
}

/// On-disk format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else (including `pcmd.yml`) is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}
