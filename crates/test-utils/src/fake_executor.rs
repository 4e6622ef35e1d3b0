use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pcmd::color::{ColorAllocator, ColorCode};
use pcmd::config::CommandSpec;
use pcmd::engine::{TaskOutcome, TaskReport};
use pcmd::exec::{TaskExecutor, TaskFuture};

/// A fake executor that:
/// - records which commands were "run" and which color each got
/// - tracks how many tasks were in flight at once
/// - sleeps for `delay`, then reports the configured outcome (default
///   `Success`) without spawning a process.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<(String, ColorCode)>>>,
    outcomes: Arc<Mutex<HashMap<String, TaskOutcome>>>,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    delay: Duration,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_outcome(self, name: &str, outcome: TaskOutcome) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .insert(name.to_string(), outcome);
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn colors(&self) -> Vec<ColorCode> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|(_, color)| *color)
            .collect()
    }

    pub fn launch_count(&self) -> usize {
        self.executed.lock().unwrap().len()
    }

    /// Highest number of tasks that were running at the same time.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl TaskExecutor for FakeExecutor {
    fn execute(&self, spec: CommandSpec, palette: Arc<ColorAllocator>) -> TaskFuture {
        let this = self.clone();

        Box::pin(async move {
            let color = palette.acquire();
            this.executed
                .lock()
                .unwrap()
                .push((spec.name.clone(), color));

            let now = this.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            this.peak.fetch_max(now, Ordering::SeqCst);

            if !this.delay.is_zero() {
                tokio::time::sleep(this.delay).await;
            }

            this.in_flight.fetch_sub(1, Ordering::SeqCst);

            let outcome = this
                .outcomes
                .lock()
                .unwrap()
                .get(&spec.name)
                .cloned()
                .unwrap_or(TaskOutcome::Success);

            TaskReport::new(spec.name, Some(color), outcome)
        })
    }
}
