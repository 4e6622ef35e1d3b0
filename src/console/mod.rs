// src/console/mod.rs

//! Line-oriented output sink shared by every running task.
//!
//! Implementations must write each line atomically with respect to other
//! callers: lines from different tasks may interleave, but a single line is
//! never torn.

use std::io::{self, Write};

use crate::color::ColorCode;
use crate::types::OutputStream;

pub mod memory;

pub use memory::MemoryConsole;

pub trait Console: Send + Sync {
    /// Write `line` plus a trailing newline to the given stream.
    fn write_line(&self, stream: OutputStream, line: &str) -> io::Result<()>;
}

/// Console backed by the process's own stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&self, stream: OutputStream, line: &str) -> io::Result<()> {
        match stream {
            OutputStream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            OutputStream::Stderr => {
                let mut err = io::stderr().lock();
                writeln!(err, "{line}")
            }
        }
    }
}

/// `\x1b[<code>m[<name>]\x1b[0m`, the label put in front of every line a
/// task emits.
pub fn format_prefix(color: ColorCode, name: &str) -> String {
    color.paint(&format!("[{name}]"))
}

/// Completion line for a clean exit.
pub fn format_success(prefix: &str, color: ColorCode) -> String {
    format!("{prefix} {}", color.paint("finished with exit code 0"))
}

/// Completion line for a non-zero exit or a failed wait.
pub fn format_failure(prefix: &str, color: ColorCode, reason: &str) -> String {
    format!(
        "{prefix} {}",
        color.paint(&format!("finished with error: {reason}"))
    )
}
