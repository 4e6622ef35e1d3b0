// src/exec/mod.rs

//! Process execution layer.
//!
//! This module actually runs the configured commands using
//! `tokio::process::Command` and forwards their output, line by line, to a
//! [`crate::console::Console`].
//!
//! - [`backend`] provides the `TaskExecutor` trait the coordinator talks to
//!   and the production `ShellExecutor`.
//! - [`task_runner`] runs a single command: color, spawn, drain, wait.
//! - [`shell`] picks the platform shell and renders exit statuses.

pub mod backend;
pub mod shell;
pub mod task_runner;

pub use backend::{ShellExecutor, TaskExecutor, TaskFuture};
pub use shell::{signal_name, ShellProgram};
pub use task_runner::{run_command, DrainError};
