// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cumulative counters over gating attempts.
//!
//! Every call to the level gate counts here, whether or not the message is
//! ultimately emitted, so the counters describe what the program *tried*
//! to log. Counters are atomic, never reset, and deliberately updated
//! outside the sink lock.

use crate::Level;
use crate::level::LEVEL_COUNT;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering::Relaxed};

/// Per-logger attempt counters.
#[derive(Debug)]
pub struct Statistics {
    total: AtomicU64,
    per_level: [AtomicU64; LEVEL_COUNT],
    highest: AtomicU8,
}

impl Statistics {
    pub(crate) const fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            per_level: [const { AtomicU64::new(0) }; LEVEL_COUNT],
            highest: AtomicU8::new(Level::None as u8),
        }
    }

    /// Records one gating attempt at `level`.
    pub(crate) fn update(&self, level: Level) {
        self.total.fetch_add(1, Relaxed);
        self.per_level[level as usize].fetch_add(1, Relaxed);
        self.highest.fetch_max(level as u8, Relaxed);
    }

    /// Total number of gating attempts.
    pub fn total(&self) -> u64 {
        self.total.load(Relaxed)
    }

    /// Number of attempts at exactly `level`.
    pub fn count(&self, level: Level) -> u64 {
        self.per_level[level as usize].load(Relaxed)
    }

    /// The highest level ever passed to the gate.
    ///
    /// [`Level::None`] before the first attempt.
    pub fn highest(&self) -> Level {
        Level::from_u8(self.highest.load(Relaxed)).unwrap_or(Level::None)
    }

    /// Renders the counters in the fixed multi-line report format.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "Log statistics:");
        let _ = write!(out, "\n\tNumber of logs: {}", self.total());
        let _ = write!(out, "\n\tNumber of 'fatal' logs:    {}", self.count(Level::Fatal));
        let _ = write!(out, "\n\tNumber of 'critical' logs: {}", self.count(Level::Critical));
        let _ = write!(out, "\n\tNumber of 'error' logs:    {}", self.count(Level::Error));
        let _ = write!(out, "\n\tNumber of 'warning' logs:  {}", self.count(Level::Warning));
        let _ = write!(out, "\n\tNumber of 'info' logs:     {}", self.count(Level::Info));
        let _ = write!(out, "\n\tNumber of 'detail' logs:   {}", self.count(Level::Detail));
        let _ = write!(out, "\n\tNumber of 'verbose' logs:  {}", self.count(Level::Verbose));
        let _ = write!(out, "\n\tNumber of 'null' logs:     {}", self.count(Level::None));
        let _ = write!(out, "\nHighest log level: {}", self.highest());
        out
    }
}
