// src/engine/mod.rs

//! Fan-out engine for pcmd.
//!
//! The [`Coordinator`] launches one task per configured command and joins
//! them all. Each task produces a [`TaskReport`]; the reports of one run are
//! gathered into a [`RunSummary`].

use crate::color::ColorCode;
use crate::types::TaskName;

/// How a single command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The process exited with status 0.
    Success,
    /// Non-zero exit, death by signal, or a failed wait.
    Failed {
        exit_code: Option<i32>,
        reason: String,
    },
    /// The process (or one of its pipes) could not be set up; nothing ran.
    LaunchFailed(String),
    /// The task itself panicked or was cancelled before reporting.
    Aborted(String),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success)
    }
}

/// Structured result of one task, returned alongside the console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub name: TaskName,
    /// `None` only for aborted tasks, which may die before picking a color.
    pub color: Option<ColorCode>,
    pub outcome: TaskOutcome,
    /// Set when forwarding output to the console failed and draining stopped.
    pub output_error: Option<String>,
    pub stdout_lines: usize,
    pub stderr_lines: usize,
}

impl TaskReport {
    pub fn new(name: impl Into<TaskName>, color: Option<ColorCode>, outcome: TaskOutcome) -> Self {
        Self {
            name: name.into(),
            color,
            outcome,
            output_error: None,
            stdout_lines: 0,
            stderr_lines: 0,
        }
    }
}

/// Reports of every task in one fan-out, in launch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reports: Vec<TaskReport>,
}

impl RunSummary {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &TaskReport> {
        self.reports.iter().filter(|r| r.outcome.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &TaskReport> {
        self.reports.iter().filter(|r| !r.outcome.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn report(&self, name: &str) -> Option<&TaskReport> {
        self.reports.iter().find(|r| r.name == name)
    }
}

pub mod coordinator;

pub use coordinator::Coordinator;
