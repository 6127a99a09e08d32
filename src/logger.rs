// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger context object: level gate, configuration and sink access.
//!
//! A [`Logger`] owns every piece of mutable logging state: the runtime
//! threshold, the field vector, the health status, the statistics and the
//! sink. Call sites normally reach it through the
//! [`global_logger`](crate::global_logger) instance, but tests construct
//! their own so nothing shared leaks between them.
//!
//! Threshold, fields and status are independent relaxed atomics: a writer
//! racing a logging call may see a message gated or formatted under the
//! value that is about to change. That is accepted and documented, not a
//! bug. The one resource that genuinely needs exclusion, the sink, sits
//! behind a mutex held only for write + flush of an already-formatted
//! line, so concurrent callers never interleave partial lines.

use crate::compose::{self, CallSite};
use crate::fields::{Fields, Preset};
use crate::identity::{IdentityProvider, SystemIdentity};
use crate::level::{ACTIVE, STATIC_FLOOR};
use crate::record::LogRecord;
use crate::sink::{OpenError, Sink};
use crate::stats::Statistics;
use crate::stderr_sink::StderrSink;
use crate::{FileSink, Level};
use std::path::Path;
use std::sync::atomic::{AtomicI32, AtomicU8, AtomicU16, Ordering::Relaxed};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// The most bytes one log line is expected to take, used by the
/// best-effort disk-space check.
pub const MAX_RECORD_LEN: u64 = 1024;

/// A complete logging facility.
#[derive(Debug)]
pub struct Logger {
    min_level: AtomicU8,
    fields: AtomicU16,
    status: AtomicI32,
    stats: Statistics,
    sink: Mutex<Option<Box<dyn Sink>>>,
    identity: Box<dyn IdentityProvider>,
    epoch: Instant,
}

impl Logger {
    /// A logger writing to stderr, with the runtime threshold at the
    /// compile-time floor and the Default field preset.
    pub fn new() -> Logger {
        Logger::with_sink(StderrSink::new())
    }

    /// A logger writing to the given sink.
    pub fn with_sink(sink: impl Sink + 'static) -> Logger {
        Logger {
            min_level: AtomicU8::new(STATIC_FLOOR as u8),
            fields: AtomicU16::new(Fields::default().bits()),
            status: AtomicI32::new(0),
            stats: Statistics::new(),
            sink: Mutex::new(Some(Box::new(sink))),
            identity: Box::new(SystemIdentity::new()),
            epoch: Instant::now(),
        }
    }

    /// Replaces the identity accessors. Useful for pinning exact output in
    /// tests; must happen before the logger is shared.
    pub fn set_identity(&mut self, identity: impl IdentityProvider + 'static) {
        self.identity = Box::new(identity);
    }

    /// Opens the log file at `path` and makes it the sink.
    ///
    /// On failure the logger is marked errored, a diagnostic goes to
    /// stderr, and subsequent logging calls no-op per [`should_log`]
    /// (levels above Error keep alerting on stderr).
    ///
    /// [`should_log`]: Logger::should_log
    pub fn open(&self, path: impl AsRef<Path>, append: bool) -> Result<(), OpenError> {
        match FileSink::open(path.as_ref(), append) {
            Ok(sink) => {
                *self.lock_sink() = Some(Box::new(sink));
                self.status.store(0, Relaxed);
                Ok(())
            }
            Err(err) => {
                self.status.store(-1, Relaxed);
                eprintln!("microlog: {err}; check that disk space is available");
                Err(err)
            }
        }
    }

    /// Flushes and drops the sink. Later messages go nowhere until a new
    /// sink is opened.
    pub fn close(&self) {
        let mut guard = self.lock_sink();
        if let Some(sink) = guard.as_mut() {
            let _ = sink.flush();
        }
        *guard = None;
    }

    // ------------------------------------------------------------------
    // The level gate
    // ------------------------------------------------------------------

    /// Whether a message at `level` should be formatted and emitted.
    pub fn should_log(&self, level: Level) -> bool {
        self.should_log_with(level, Level::None)
    }

    /// The gate with a call-site-local minimum level.
    ///
    /// The local minimum substitutes for the runtime threshold, letting a
    /// call site opt back in below the global setting. It never defeats
    /// the compile-time floor.
    ///
    /// Every call counts one attempt in [`statistics`](Logger::statistics),
    /// whatever the outcome.
    pub fn should_log_with(&self, level: Level, local_min: Level) -> bool {
        self.stats.update(level);

        let status = self.status.load(Relaxed);
        if status != 0 {
            // Keep alerting for the truly severe levels even while broken.
            if level > Level::Error {
                eprintln!(
                    "microlog: error {status}: logger disabled, and a {level} message was generated"
                );
            }
            return false;
        }

        if !ACTIVE || level < STATIC_FLOOR || level < local_min {
            return false;
        }

        if local_min == Level::None && (level as u8) < self.min_level.load(Relaxed) {
            return false;
        }

        true
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Sets the runtime minimum level.
    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, Relaxed);
    }

    pub fn min_level(&self) -> Level {
        Level::from_u8(self.min_level.load(Relaxed)).unwrap_or(Level::None)
    }

    /// Replaces the whole field vector.
    pub fn set_fields(&self, fields: Fields) {
        self.fields.store(fields.bits(), Relaxed);
    }

    /// Applies a preset, replacing every flag.
    pub fn set_preset(&self, preset: Preset) {
        self.set_fields(Fields::preset(preset));
    }

    /// Turns individual flags on without touching the others.
    pub fn enable_fields(&self, fields: Fields) {
        self.fields.fetch_or(fields.bits(), Relaxed);
    }

    /// Turns individual flags off without touching the others.
    pub fn disable_fields(&self, fields: Fields) {
        self.fields.fetch_and(!fields.bits(), Relaxed);
    }

    pub fn fields(&self) -> Fields {
        Fields::from_bits_truncate(self.fields.load(Relaxed))
    }

    /// 0 while healthy, non-zero once the sink has failed.
    pub fn status(&self) -> i32 {
        self.status.load(Relaxed)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    // ------------------------------------------------------------------
    // Message assembly
    // ------------------------------------------------------------------

    /// Begins a streamed log entry, if the gate allows it.
    ///
    /// The returned [`Entry`](crate::Entry) buffers whatever is written to
    /// it and performs the actual write + flush when it goes out of scope.
    /// Prefer the [`entry!`](crate::entry) macro, which captures the call
    /// site for you.
    pub fn entry(&self, level: Level, site: CallSite) -> Option<crate::Entry<'_>> {
        self.entry_with(level, Level::None, site)
    }

    /// [`entry`](Logger::entry) with a call-site-local minimum level.
    pub fn entry_with(
        &self,
        level: Level,
        local_min: Level,
        site: CallSite,
    ) -> Option<crate::Entry<'_>> {
        let record = self.begin_record(level, local_min, site)?;
        Some(crate::Entry::new(self, record))
    }

    /// Gate + space check + header composition. `None` means the message
    /// must not be emitted and its body must not be evaluated.
    pub(crate) fn begin_record(
        &self,
        level: Level,
        local_min: Level,
        site: CallSite,
    ) -> Option<LogRecord> {
        if !self.should_log_with(level, local_min) {
            return None;
        }
        if !self.has_available_space() {
            return None;
        }
        let mut record = LogRecord::new(level);
        compose::compose_header(
            &mut record,
            self.fields(),
            level,
            &site,
            self.identity.as_ref(),
            self.epoch.elapsed(),
        );
        Some(record)
    }

    /// Writes a finished record to the sink as one line.
    pub(crate) fn submit(&self, record: LogRecord) {
        self.write_line(&record.to_string());
    }

    fn has_available_space(&self) -> bool {
        let probe = self.lock_sink().as_ref().and_then(|s| s.available_space());
        match probe {
            Some(available) if available < MAX_RECORD_LEN => {
                eprintln!(
                    "microlog: not enough space available on the log partition ({available} bytes)"
                );
                false
            }
            _ => true,
        }
    }

    fn lock_sink(&self) -> MutexGuard<'_, Option<Box<dyn Sink>>> {
        // A panic while holding the lock leaves the sink intact, so a
        // poisoned lock is still usable.
        self.sink.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut guard = self.lock_sink();
        if let Some(sink) = guard.as_mut() {
            let outcome = sink.write_line(line).and_then(|()| sink.flush());
            if let Err(err) = outcome {
                self.status.store(1, Relaxed);
                eprintln!("microlog: write failed, logging disabled: {err}");
            }
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub(crate) fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    // ------------------------------------------------------------------
    // Composite operations
    // ------------------------------------------------------------------

    /// Writes the column-title block for the enabled fields, framed by
    /// rule lines. Gated like an ordinary message at `level`.
    pub fn log_titles(&self, level: Level) {
        if self.should_log(level) {
            self.write_line(&compose::compose_column_titles(self.fields()));
        }
    }

    /// Writes a bare rule line.
    pub fn log_separator(&self, level: Level) {
        if self.should_log(level) {
            self.write_line(compose::RULE);
        }
    }

    /// Writes `Date: <ctime-style date>` preceded by a blank line.
    pub fn log_date_stamp(&self, level: Level) {
        if self.should_log(level) {
            self.write_line(&compose::compose_date_stamp());
        }
    }

    /// Writes the list of known level tags.
    pub fn log_level_legend(&self) {
        let mut line = String::from("Log levels: ");
        for level in Level::all() {
            line.push_str(level.tag());
            line.push(' ');
        }
        self.write_line(&line);
    }

    /// Writes the current runtime minimum level.
    pub fn log_min_level(&self) {
        self.write_line(&format!(
            "Minimum log level to be logged: {}",
            self.min_level().tag()
        ));
    }

    /// Writes the statistics report to the sink.
    pub fn log_statistics(&self) {
        self.write_line(&self.stats.report());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new()
    }
}

/*
Boilerplate notes.

Clone on Logger makes no sense: the sink is a unique resource and the
statistics are a history, not data. Equality and hashing are equally
unclear (data or provenance?), so none of it is implemented. Default is
the stderr logger, matching new(). Send + Sync come for free from the
atomics, the mutex and the Send + Sync bounds on the trait objects.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;

    fn quiet_logger() -> (Logger, InMemorySink) {
        let sink = InMemorySink::new();
        (Logger::with_sink(sink.clone()), sink)
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn gate_follows_the_runtime_threshold() {
        let (logger, _sink) = quiet_logger();
        logger.set_min_level(Level::Warning);
        assert!(!logger.should_log(Level::Detail));
        assert!(!logger.should_log(Level::Info));
        assert!(logger.should_log(Level::Warning));
        assert!(logger.should_log(Level::Fatal));
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn local_minimum_substitutes_for_the_threshold() {
        let (logger, _sink) = quiet_logger();
        logger.set_min_level(Level::Error);
        // Below the global threshold, but the local minimum lets it through.
        assert!(logger.should_log_with(Level::Detail, Level::Detail));
        assert!(logger.should_log_with(Level::Detail, Level::Verbose));
        // The local minimum also gates on its own.
        assert!(!logger.should_log_with(Level::Detail, Level::Info));
    }

    #[test]
    #[cfg(not(feature = "disabled"))]
    fn statistics_count_attempts_not_emissions() {
        let (logger, _sink) = quiet_logger();
        logger.set_min_level(Level::Fatal);
        for _ in 0..5 {
            assert!(!logger.should_log(Level::Verbose));
        }
        assert!(logger.should_log(Level::Fatal));
        assert_eq!(logger.statistics().total(), 6);
        assert_eq!(logger.statistics().count(Level::Verbose), 5);
        assert_eq!(logger.statistics().count(Level::Fatal), 1);
        assert_eq!(logger.statistics().highest(), Level::Fatal);
    }

    #[test]
    fn errored_logger_gates_everything() {
        let (logger, sink) = quiet_logger();
        logger.status.store(-1, Relaxed);
        assert!(!logger.should_log(Level::Error));
        assert!(!logger.should_log(Level::Fatal));
        let site = CallSite::new(file!(), line!(), "t");
        assert!(logger.begin_record(Level::Fatal, Level::None, site).is_none());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn open_failure_sets_status_and_reports_err() {
        let (logger, _sink) = quiet_logger();
        assert!(logger.open("/definitely/not/a/dir/t.log", true).is_err());
        assert_ne!(logger.status(), 0);
    }

    #[test]
    fn reopen_clears_an_errored_status() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, _sink) = quiet_logger();
        let _ = logger.open("/definitely/not/a/dir/t.log", true);
        assert_ne!(logger.status(), 0);
        logger.open(dir.path().join("t.log"), true).unwrap();
        assert_eq!(logger.status(), 0);
    }

    #[test]
    fn min_level_round_trips() {
        let (logger, _sink) = quiet_logger();
        assert_eq!(logger.min_level(), STATIC_FLOOR);
        logger.set_min_level(Level::Critical);
        assert_eq!(logger.min_level(), Level::Critical);
    }

    #[test]
    fn field_flags_toggle_individually() {
        let (logger, _sink) = quiet_logger();
        logger.set_preset(Preset::Default);
        logger.enable_fields(Fields::LINE);
        assert!(logger.fields().contains(Fields::LINE | Fields::DATE));
        logger.disable_fields(Fields::DATE);
        assert!(!logger.fields().contains(Fields::DATE));
        assert!(logger.fields().contains(Fields::LINE));
    }

    #[test]
    fn closed_logger_swallows_lines() {
        let (logger, sink) = quiet_logger();
        logger.close();
        logger.log_separator(Level::Fatal);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn introspection_lines_have_the_expected_shape() {
        let (logger, sink) = quiet_logger();
        logger.set_min_level(Level::Warning);
        logger.log_level_legend();
        logger.log_min_level();
        let lines = sink.lines();
        assert!(lines[0].starts_with("Log levels: "));
        assert!(lines[0].contains("VERBOSE "));
        assert!(lines[0].contains("FATAL   "));
        assert_eq!(lines[1], "Minimum log level to be logged: WARNING ");
    }
}
