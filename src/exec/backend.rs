// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The coordinator talks to a `TaskExecutor` instead of spawning processes
//! itself. This makes it easy to swap in a fake executor in tests while
//! keeping the production implementation in [`super::task_runner`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::color::ColorAllocator;
use crate::config::CommandSpec;
use crate::console::Console;
use crate::engine::TaskReport;

use super::shell::ShellProgram;
use super::task_runner::run_command;

/// Future produced by [`TaskExecutor::execute`].
///
/// It owns everything it needs so the coordinator can hand it to
/// `tokio::spawn`.
pub type TaskFuture = Pin<Box<dyn Future<Output = TaskReport> + Send + 'static>>;

/// Trait abstracting how a single configured command is executed.
///
/// Production code uses [`ShellExecutor`]; tests can provide an
/// implementation that doesn't spawn real processes.
pub trait TaskExecutor: Send + Sync {
    /// Run `spec` to completion, taking its color from `palette`.
    ///
    /// Must not fail: every problem ends up in the returned report.
    fn execute(&self, spec: CommandSpec, palette: Arc<ColorAllocator>) -> TaskFuture;
}

/// Real executor: runs each command through the system shell and writes
/// prefixed output to a console.
#[derive(Clone)]
pub struct ShellExecutor {
    console: Arc<dyn Console>,
    shell: ShellProgram,
}

impl ShellExecutor {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            console,
            shell: ShellProgram::default(),
        }
    }

    /// Use a different shell program, e.g. `bash -c`.
    pub fn with_shell(mut self, shell: ShellProgram) -> Self {
        self.shell = shell;
        self
    }
}

impl TaskExecutor for ShellExecutor {
    fn execute(&self, spec: CommandSpec, palette: Arc<ColorAllocator>) -> TaskFuture {
        // Clone what the future needs so it doesn't borrow `self`.
        let console = Arc::clone(&self.console);
        let shell = self.shell.clone();

        Box::pin(async move { run_command(spec, &palette, console, &shell).await })
    }
}
