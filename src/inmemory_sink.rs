// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-memory sink for tests.
//!
//! Captures lines instead of writing them anywhere, so a test can hand one
//! clone to a [`Logger`](crate::Logger), keep the other, and assert on the
//! exact lines afterwards.

use crate::sink::Sink;
use std::io;
use std::sync::{Arc, Mutex};

/// Collects log lines in memory.
///
/// Clones share the same buffer; the logger owns one clone while the test
/// reads through another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Joins the captured lines with newlines and clears the buffer.
    pub fn drain(&self) -> String {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        let joined = lines.join("\n");
        lines.clear();
        joined
    }
}

impl Sink for InMemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
