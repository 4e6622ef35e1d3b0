use pcmd::config::CommandSpec;

/// Builder for the command list a config file would produce.
pub struct ConfigFileBuilder {
    commands: Vec<CommandSpec>,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_command(mut self, name: &str, command: &str) -> Self {
        self.commands.push(CommandSpec::new(name, command));
        self
    }

    /// `count` commands named `cmd_0..cmd_{count-1}`, each echoing its name.
    pub fn with_echo_commands(mut self, count: usize) -> Self {
        for i in 0..count {
            let name = format!("cmd_{i}");
            let command = format!("echo {name}");
            self.commands.push(CommandSpec::new(name, command));
        }
        self
    }

    pub fn build_specs(self) -> Vec<CommandSpec> {
        self.commands
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render specs as the YAML list `pcmd.yml` expects.
pub fn to_yaml(specs: &[CommandSpec]) -> String {
    let mut out = String::new();
    for spec in specs {
        out.push_str(&format!("- name: {:?}\n  command: {:?}\n", spec.name, spec.command));
    }
    out
}
