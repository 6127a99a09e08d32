// SPDX-License-Identifier: MIT OR Apache-2.0

//! The streamed log entry: scope exit finishes the line.
//!
//! An [`Entry`] is the non-macro way to build a message body piecewise.
//! Dropping it performs the write + flush, so every exit path of the
//! caller finishes the line; there is no terminator token to forget.

use crate::logger::Logger;
use crate::record::LogRecord;
use std::fmt;

/// A gated, header-composed log line waiting for its message body.
///
/// Obtained from [`Logger::entry`] (or the [`entry!`](crate::entry)
/// macro); only exists when the gate was open, so everything written to it
/// will be emitted.
#[derive(Debug)]
pub struct Entry<'a> {
    logger: &'a Logger,
    record: LogRecord,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(logger: &'a Logger, record: LogRecord) -> Self {
        Self { logger, record }
    }

    /// Appends text to the message body.
    pub fn write(&mut self, message: &str) {
        self.record.log(message);
    }
}

impl fmt::Write for Entry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.record.log(s);
        Ok(())
    }
}

impl Drop for Entry<'_> {
    fn drop(&mut self) {
        self.logger.submit(std::mem::take(&mut self.record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::CallSite;
    use crate::inmemory_sink::InMemorySink;
    use crate::{Fields, Level};
    use std::fmt::Write as _;

    fn site() -> CallSite {
        CallSite::new("src/entry.rs", 1, "microlog::entry::tests")
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn entry_writes_on_drop() {
        let sink = InMemorySink::new();
        let logger = Logger::with_sink(sink.clone());
        logger.set_fields(Fields::LEVEL | Fields::MESSAGE);

        {
            let mut entry = logger.entry(Level::Warning, site()).expect("gate is open");
            entry.write("part one, ");
            write!(entry, "part {}", 2).unwrap();
            assert!(sink.lines().is_empty(), "nothing written before scope exit");
        }

        assert_eq!(sink.lines(), vec!["WARNING   : part one, part 2"]);
    }

    #[test]
    fn gated_entry_never_materializes() {
        let sink = InMemorySink::new();
        let logger = Logger::with_sink(sink.clone());
        logger.set_min_level(Level::Error);

        assert!(logger.entry(Level::Info, site()).is_none());
        assert!(sink.lines().is_empty());
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn local_minimum_opens_an_entry_below_the_threshold() {
        let sink = InMemorySink::new();
        let logger = Logger::with_sink(sink.clone());
        logger.set_min_level(Level::Error);
        logger.set_fields(Fields::LEVEL | Fields::MESSAGE);

        let mut entry = logger
            .entry_with(Level::Detail, Level::Detail, site())
            .expect("local minimum overrides the threshold");
        entry.write("targeted debugging");
        drop(entry);

        assert_eq!(sink.lines(), vec!["DETAIL    : targeted debugging"]);
    }
}
