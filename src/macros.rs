// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementation functions behind the logging macros.
//!
//! Each macro expansion follows the same three-phase shape:
//!
//! 1. [`log_with_pre`] runs the gate and, when it is open, returns a
//!    record with the header fields already composed.
//! 2. The macro-generated code writes the message body through a
//!    [`Formatter`]. This only runs on an open gate, so argument
//!    expressions in a suppressed message are never evaluated.
//! 3. [`log_post`] hands the finished record back to the logger for the
//!    serialized write + flush.
//!
//! The whole expansion sits behind [`log_enabled!`](crate::log_enabled),
//! a constant comparison against the compile-time floor, so raising the
//! floor (or enabling the `disabled` feature) folds suppressed call sites
//! out of optimized builds entirely.

use crate::compose::CallSite;
use crate::logger::Logger;
use crate::record::LogRecord;
use crate::Level;
use std::fmt::Display;

/// Writes message body parts into a log record.
///
/// Used by the macro-generated code; literal runs of the format string go
/// through [`write_literal`](Formatter::write_literal), interpolated
/// values through [`write_val`](Formatter::write_val).
pub struct Formatter<'a> {
    record: &'a mut LogRecord,
}

impl<'a> Formatter<'a> {
    #[inline]
    pub fn new(record: &'a mut LogRecord) -> Self {
        Self { record }
    }

    #[inline]
    pub fn write_literal(&mut self, s: &str) {
        self.record.log(s);
    }

    #[inline]
    pub fn write_val<Val: Display>(&mut self, val: Val) {
        self.record.log_owned(val.to_string());
    }
}

/// Phase one for a plain leveled message.
pub fn log_pre(logger: &Logger, level: Level, site: CallSite) -> Option<LogRecord> {
    logger.begin_record(level, Level::None, site)
}

/// Phase one with a call-site-local minimum level.
pub fn log_with_pre(
    logger: &Logger,
    level: Level,
    local_min: Level,
    site: CallSite,
) -> Option<LogRecord> {
    logger.begin_record(level, local_min, site)
}

/// Phase three: emit the finished record.
pub fn log_post(logger: &Logger, record: LogRecord) {
    logger.submit(record);
}

/// Whether a level survives the compile-time floor.
///
/// This is the static half of the gate only; the runtime threshold and
/// logger status are checked by [`Logger::should_log`]. The comparison is
/// between constants, so in optimized builds a closed result removes the
/// guarded block altogether.
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {
        $crate::ACTIVE && ($level as u8) >= ($crate::STATIC_FLOOR as u8)
    };
}

/// The module path of the enclosing function, as a `&'static str`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: &T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(&f);
        // strip the trailing "::f"
        &name[..name.len() - 3]
    }};
}

/// Begins a streamed [`Entry`](crate::Entry) on a logger, capturing the
/// call site.
///
/// ```rust
/// use microlog::{Level, Logger, InMemorySink};
/// use std::fmt::Write as _;
///
/// let sink = InMemorySink::new();
/// let logger = Logger::with_sink(sink.clone());
/// if let Some(mut entry) = microlog::entry!(logger, Level::Warning) {
///     let _ = write!(entry, "retrying ({} attempts left)", 2);
/// }
/// assert!(sink.drain().ends_with(": retrying (2 attempts left)"));
/// ```
#[macro_export]
macro_rules! entry {
    ($logger:expr, $level:expr) => {
        $logger.entry(
            $level,
            $crate::CallSite::new(file!(), line!(), $crate::__function_path!()),
        )
    };
    ($logger:expr, $level:expr, $local_min:expr) => {
        $logger.entry_with(
            $level,
            $local_min,
            $crate::CallSite::new(file!(), line!(), $crate::__function_path!()),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use crate::Fields;

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn log_enabled_reflects_the_floor() {
        // Default build: no floor, everything is statically enabled.
        assert!(log_enabled!(Level::Verbose));
        assert!(log_enabled!(Level::Fatal));
    }

    #[test]
    fn function_path_names_this_test() {
        let path: &str = crate::__function_path!();
        assert!(
            path.ends_with("::function_path_names_this_test"),
            "unexpected path {path:?}"
        );
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn three_phase_flow_produces_one_line() {
        let sink = InMemorySink::new();
        let logger = Logger::with_sink(sink.clone());
        logger.set_fields(Fields::LEVEL | Fields::MESSAGE);

        let site = CallSite::new(file!(), line!(), "microlog::macros::tests");
        let mut record = log_pre(&logger, Level::Error, site).expect("gate is open");
        let mut formatter = Formatter::new(&mut record);
        formatter.write_literal("exit code ");
        formatter.write_val(3);
        log_post(&logger, record);

        assert_eq!(sink.lines(), vec!["ERROR     : exit code 3"]);
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn closed_gate_yields_no_record() {
        let logger = Logger::with_sink(InMemorySink::new());
        logger.set_min_level(Level::Fatal);
        let site = CallSite::new(file!(), line!(), "microlog::macros::tests");
        assert!(log_pre(&logger, Level::Info, site).is_none());
        // A local minimum reopens it.
        assert!(log_with_pre(&logger, Level::Info, Level::Info, site).is_some());
    }
}
