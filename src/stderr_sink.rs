// SPDX-License-Identifier: MIT OR Apache-2.0

//! The stderr sink, used until a file is opened.

use crate::sink::Sink;
use std::io::{self, Write};

/// Writes log lines to standard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StderrSink;

impl StderrSink {
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut lock = io::stderr().lock();
        lock.write_all(line.as_bytes())?;
        lock.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        // stderr is unbuffered
        Ok(())
    }
}

/*
Boilerplate notes.

StderrSink is zero-sized, so Copy/PartialEq/Eq/Hash/Default are all free
and harmless to derive. Display would add nothing over Debug.
*/
