// src/exec/shell.rs

use std::process::ExitStatus;

use tokio::process::Command;

/// Shell used to interpret configured command strings.
///
/// Defaults to `sh -c` (or `cmd /C` on Windows). Commands are passed as one
/// opaque string so configs can use pipes and redirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellProgram {
    pub program: String,
    pub flag: String,
}

impl ShellProgram {
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// Build the child command for `command_line`. Stdio is left to the caller.
    pub fn command(&self, command_line: &str) -> Command {
        let mut c = Command::new(&self.program);
        c.arg(&self.flag).arg(command_line);
        c
    }
}

impl Default for ShellProgram {
    fn default() -> Self {
        if cfg!(windows) {
            ShellProgram::new("cmd", "/C")
        } else {
            ShellProgram::new("sh", "-c")
        }
    }
}

/// Short human description of a non-successful exit, e.g. `exit status 1`
/// or `signal: killed`.
pub fn describe_exit(status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exit status {code}");
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("signal: {}", signal_name(signal));
        }
    }

    status.to_string()
}

/// Names for the signals that commonly end a child; numbers agree across
/// Linux and macOS for all of these.
pub fn signal_name(signal: i32) -> String {
    let name = match signal {
        1 => "hangup",
        2 => "interrupt",
        3 => "quit",
        4 => "illegal instruction",
        6 => "aborted",
        8 => "floating point exception",
        9 => "killed",
        11 => "segmentation fault",
        13 => "broken pipe",
        14 => "alarm clock",
        15 => "terminated",
        other => return format!("signal {other}"),
    };
    name.to_string()
}
