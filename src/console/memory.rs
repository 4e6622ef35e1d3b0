// src/console/memory.rs

use std::io;
use std::sync::{Arc, Mutex};

use super::Console;
use crate::types::OutputStream;

/// Console that records lines in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// executor and inspect another. A stream can be switched to fail every
/// write, which is how broken pipes on the real console are simulated.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    lines: Vec<(OutputStream, String)>,
    failing: Vec<OutputStream>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write to `stream` fail with `BrokenPipe`.
    pub fn fail_stream(&self, stream: OutputStream) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.failing.contains(&stream) {
            inner.failing.push(stream);
        }
    }

    /// All lines in the order they were written, across both streams.
    pub fn lines(&self) -> Vec<(OutputStream, String)> {
        self.inner.lock().unwrap().lines.clone()
    }

    pub fn stream_lines(&self, stream: OutputStream) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .lines
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stream_lines(OutputStream::Stdout)
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.stream_lines(OutputStream::Stderr)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().lines.is_empty()
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, stream: OutputStream, line: &str) -> io::Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing.contains(&stream) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("{stream} is closed"),
            ));
        }
        inner.lines.push((stream, line.to_string()));
        Ok(())
    }
}
