// src/config/validate.rs

use std::collections::HashSet;
use std::fmt;

use crate::config::model::ConfigFile;

/// Something odd about a config that still lets the run go ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Two or more entries share a name, so their prefixes only differ by color.
    DuplicateName(String),
    /// Entry at this index has an empty or whitespace-only name.
    BlankName(usize),
    /// The named entry has nothing to run; the shell will exit 0 immediately.
    BlankCommand(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::DuplicateName(name) => {
                write!(f, "command name '{name}' is used more than once")
            }
            ConfigWarning::BlankName(idx) => write!(f, "command #{idx} has a blank name"),
            ConfigWarning::BlankCommand(name) => {
                write!(f, "command '{name}' has an empty command string")
            }
        }
    }
}

/// Run basic semantic checks against a loaded configuration.
///
/// None of these are fatal: every entry is still launched. Each duplicate
/// name is reported once.
pub fn validate_config(cfg: &ConfigFile) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for (idx, spec) in cfg.commands.iter().enumerate() {
        if spec.name.trim().is_empty() {
            warnings.push(ConfigWarning::BlankName(idx));
        } else if !seen.insert(spec.name.as_str()) && reported.insert(spec.name.as_str()) {
            warnings.push(ConfigWarning::DuplicateName(spec.name.clone()));
        }

        if spec.command.trim().is_empty() {
            warnings.push(ConfigWarning::BlankCommand(spec.name.clone()));
        }
    }

    warnings
}
