// src/engine/coordinator.rs

//! Launch-everything-then-join fan-out.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::color::ColorAllocator;
use crate::config::CommandSpec;
use crate::console::Console;
use crate::engine::{RunSummary, TaskOutcome, TaskReport};
use crate::exec::TaskExecutor;
use crate::types::{OutputStream, TaskName};

/// Runs every configured command at once and waits for all of them.
///
/// There is no throttling, cancellation or deadline: N commands means N
/// tokio tasks and N child processes, and [`Coordinator::run`] returns only
/// once every one of them has finished.
pub struct Coordinator {
    executor: Arc<dyn TaskExecutor>,
    palette: Arc<ColorAllocator>,
    console: Arc<dyn Console>,
}

impl Coordinator {
    pub fn new(
        executor: Arc<dyn TaskExecutor>,
        palette: Arc<ColorAllocator>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            executor,
            palette,
            console,
        }
    }

    /// Launch one task per spec and join them all.
    ///
    /// Each task writes a blank line to stdout once its command has
    /// finished. Failures are reported by the tasks themselves; the
    /// coordinator only collects their reports.
    pub async fn run(&self, specs: Vec<CommandSpec>) -> RunSummary {
        if specs.is_empty() {
            debug!("no commands configured; nothing to run");
            return RunSummary::default();
        }

        info!(count = specs.len(), "launching commands");

        let handles: Vec<(TaskName, JoinHandle<TaskReport>)> = specs
            .into_iter()
            .map(|spec| {
                let name = spec.name.clone();
                (name, self.spawn_task(spec))
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let report = match handle.await {
                Ok(report) => report,
                Err(err) => {
                    error!(task = %name, error = %err, "command task did not complete");
                    TaskReport::new(name, None, TaskOutcome::Aborted(err.to_string()))
                }
            };
            reports.push(report);
        }

        let summary = RunSummary { reports };
        info!(
            total = summary.len(),
            failed = summary.failed().count(),
            "all commands finished"
        );
        summary
    }

    fn spawn_task(&self, spec: CommandSpec) -> JoinHandle<TaskReport> {
        let fut = self.executor.execute(spec, Arc::clone(&self.palette));
        let console = Arc::clone(&self.console);

        tokio::spawn(async move {
            let report = fut.await;
            if let Err(err) = console.write_line(OutputStream::Stdout, "") {
                warn!(task = %report.name, error = %err, "failed to write separator line");
            }
            report
        })
    }
}
