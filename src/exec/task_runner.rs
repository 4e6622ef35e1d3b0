// src/exec/task_runner.rs

//! Individual command runner.

use std::io;
use std::process::Stdio;
use std::sync::Arc;

use anyhow::Context;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, error, info, warn};

use crate::color::ColorAllocator;
use crate::config::CommandSpec;
use crate::console::{format_failure, format_prefix, format_success, Console};
use crate::engine::{TaskOutcome, TaskReport};
use crate::exec::shell::{describe_exit, ShellProgram};
use crate::types::OutputStream;

/// Why forwarding one of a child's streams stopped early.
#[derive(Debug, Error)]
pub enum DrainError {
    #[error("error reading {stream} of child: {source}")]
    Read {
        stream: OutputStream,
        #[source]
        source: io::Error,
    },

    #[error("error writing to {stream}: {source}")]
    Write {
        stream: OutputStream,
        #[source]
        source: io::Error,
    },
}

/// Run a single command to completion, forwarding its output to `console`.
///
/// - A color is taken from `palette` before anything else, so even a launch
///   failure is reported under the task's own prefix.
/// - stdout and stderr are drained concurrently; lines of each stream keep
///   their order.
/// - Nothing here returns an error: spawn failures, console write failures
///   and non-zero exits all end up in the returned [`TaskReport`] and as a
///   line on the console.
pub async fn run_command(
    spec: CommandSpec,
    palette: &ColorAllocator,
    console: Arc<dyn Console>,
    shell: &ShellProgram,
) -> TaskReport {
    let color = palette.acquire();
    let prefix = format_prefix(color, &spec.name);
    let mut report = TaskReport::new(spec.name.clone(), Some(color), TaskOutcome::Success);

    info!(
        task = %spec.name,
        cmd = %spec.command,
        %color,
        "starting command"
    );

    let mut cmd = shell.command(&spec.command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let spawned = cmd
        .spawn()
        .with_context(|| format!("spawning process for command '{}'", spec.name));

    let mut child = match spawned {
        Ok(child) => child,
        Err(err) => {
            let reason = format!("{err:#}");
            return launch_failed(report, &prefix, console.as_ref(), reason);
        }
    };

    let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
        (Some(stdout), Some(stderr)) => (stdout, stderr),
        // Dropping `child` kills it.
        _ => {
            let reason = "stdout/stderr pipe unavailable".to_string();
            return launch_failed(report, &prefix, console.as_ref(), reason);
        }
    };

    let console_ref: &dyn Console = console.as_ref();
    let (out, err) = tokio::join!(
        drain_lines(stdout, OutputStream::Stdout, &prefix, console_ref),
        drain_lines(stderr, OutputStream::Stderr, &prefix, console_ref),
    );

    report.stdout_lines = out.lines;
    report.stderr_lines = err.lines;
    for drain_err in [out.error, err.error].into_iter().flatten() {
        report_drain_error(&spec.name, &prefix, console_ref, &drain_err);
        if report.output_error.is_none() {
            report.output_error = Some(drain_err.to_string());
        }
    }

    let (outcome, finish_line) = match child.wait().await {
        Ok(status) if status.success() => {
            info!(task = %spec.name, exit_code = 0, "command exited");
            (TaskOutcome::Success, format_success(&prefix, color))
        }
        Ok(status) => {
            let reason = describe_exit(status);
            info!(
                task = %spec.name,
                exit_code = ?status.code(),
                %reason,
                "command exited unsuccessfully"
            );
            let line = format_failure(&prefix, color, &reason);
            (
                TaskOutcome::Failed {
                    exit_code: status.code(),
                    reason,
                },
                line,
            )
        }
        Err(err) => {
            error!(task = %spec.name, error = %err, "waiting for command failed");
            let reason = err.to_string();
            let line = format_failure(&prefix, color, &reason);
            (
                TaskOutcome::Failed {
                    exit_code: None,
                    reason,
                },
                line,
            )
        }
    };

    if let Err(err) = console.write_line(OutputStream::Stdout, &finish_line) {
        warn!(task = %spec.name, error = %err, "failed to write completion line");
    }

    report.outcome = outcome;
    report
}

fn launch_failed(
    mut report: TaskReport,
    prefix: &str,
    console: &dyn Console,
    reason: String,
) -> TaskReport {
    error!(task = %report.name, error = %reason, "command could not be started");
    let line = format!("{prefix} error starting command: {reason}");
    if let Err(err) = console.write_line(OutputStream::Stdout, &line) {
        warn!(task = %report.name, error = %err, "failed to report launch error");
    }
    report.outcome = TaskOutcome::LaunchFailed(reason);
    report
}

fn report_drain_error(name: &str, prefix: &str, console: &dyn Console, err: &DrainError) {
    match err {
        DrainError::Write { stream, .. } => {
            error!(task = %name, error = %err, "console write failed; output draining stopped");
            // The failing stream can't carry its own diagnostic.
            let line = format!("{prefix} {err}");
            if let Err(other_err) = console.write_line(stream.other(), &line) {
                warn!(
                    task = %name,
                    error = %other_err,
                    "failed to report console write failure"
                );
            }
        }
        DrainError::Read { .. } => {
            warn!(task = %name, error = %err, "reading child output failed");
        }
    }
}

struct Drained {
    lines: usize,
    error: Option<DrainError>,
}

/// Forward every line of `reader` to `stream` as `<prefix> <line>`.
///
/// Lines are split on `\n` with a trailing `\r` removed; invalid UTF-8 is
/// replaced rather than treated as an error. Stops at EOF or at the first
/// read/write failure, dropping the reader (and with it the pipe).
async fn drain_lines<R>(
    reader: R,
    stream: OutputStream,
    prefix: &str,
    console: &dyn Console,
) -> Drained
where
    R: AsyncRead + Unpin,
{
    let mut segments = BufReader::new(reader).split(b'\n');
    let mut lines = 0;

    loop {
        let segment = match segments.next_segment().await {
            Ok(Some(segment)) => segment,
            Ok(None) => break,
            Err(source) => {
                return Drained {
                    lines,
                    error: Some(DrainError::Read { stream, source }),
                };
            }
        };

        let text = String::from_utf8_lossy(strip_cr(&segment));
        if let Err(source) = console.write_line(stream, &format!("{prefix} {text}")) {
            return Drained {
                lines,
                error: Some(DrainError::Write { stream, source }),
            };
        }
        lines += 1;
    }

    debug!(%stream, lines, "child stream closed");
    Drained { lines, error: None }
}

fn strip_cr(segment: &[u8]) -> &[u8] {
    segment.strip_suffix(b"\r").unwrap_or(segment)
}
