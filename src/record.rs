// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-flight log line buffer.
//!
//! A line is composed outside the sink lock: header fields and message
//! parts accumulate in a [`LogRecord`], and only the final write of the
//! joined line is serialized. Parts are stored separately so the common
//! case of literal text never reallocates an existing buffer.

use crate::Level;
use std::fmt::{self, Display};

/// A log line under construction.
///
/// 1. Create a record for a level.
/// 2. Progressively append header fields and message parts.
/// 3. Submit it to a [`Logger`](crate::Logger), which joins the parts and
///    writes them as one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /// Appends borrowed text to the record.
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /// Appends already-owned text, avoiding a second copy.
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord.

Clone/PartialEq/Eq/Hash are derived: records are plain data and tests
compare them. Default picks Info with no parts, the least surprising empty
record (and what Entry::drop swaps in). Copy is impossible (Vec), and
ordering records makes no sense.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_parts_without_separators() {
        let mut record = LogRecord::new(Level::Info);
        record.log("a");
        record.log_owned("b".to_string());
        record.log("c");
        assert_eq!(record.to_string(), "abc");
    }

    #[test]
    fn level_is_preserved() {
        assert_eq!(LogRecord::new(Level::Fatal).level(), Level::Fatal);
        assert_eq!(LogRecord::default().level(), Level::Info);
    }
}
