// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log levels and the compile-time floor.

use std::fmt;

/// The ordered set of log levels.
///
/// Ordering is total and fixed; every gating decision is a `>=` comparison
/// on this enum. [`Level::None`] is the lowest value and doubles as the
/// "no local override" sentinel at call sites.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Lowest value; never a useful message level on its own.
    None = 0,
    /// Most chatty diagnostics.
    Verbose,
    /// Fine-grained progress messages.
    Detail,
    /// Normal operational messages.
    Info,
    /// Suspicious condition.
    Warning,
    /// Runtime error.
    Error,
    /// Error the program may not recover from.
    Critical,
    /// The program is about to die.
    Fatal,
}

pub(crate) const LEVEL_COUNT: usize = 8;

/// Whether logging is compiled in at all.
///
/// With the `disabled` cargo feature this is `false` and every macro body
/// folds away to nothing.
pub const ACTIVE: bool = !cfg!(feature = "disabled");

/// The compile-time floor.
///
/// Messages below the floor are rejected before the runtime threshold is
/// even consulted, and in optimized builds the constant comparison removes
/// their call sites entirely. Selected by the `floor_*` cargo features;
/// the default floor is [`Level::None`].
pub const STATIC_FLOOR: Level = if cfg!(feature = "floor_error") {
    Level::Error
} else if cfg!(feature = "floor_warning") {
    Level::Warning
} else if cfg!(feature = "floor_info") {
    Level::Info
} else if cfg!(feature = "floor_detail") {
    Level::Detail
} else {
    Level::None
};

impl Level {
    /// The fixed-width display tag, exactly 8 characters.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::None => "  ----  ",
            Level::Verbose => "VERBOSE ",
            Level::Detail => "DETAIL  ",
            Level::Info => "INFO    ",
            Level::Warning => "WARNING ",
            Level::Error => "ERROR   ",
            Level::Critical => "CRITICAL",
            Level::Fatal => "FATAL   ",
        }
    }

    /// Recovers a level from its `u8` representation.
    ///
    /// The only raw entry point; out-of-range values are rejected rather
    /// than clamped so a corrupted value cannot silently change gating.
    pub const fn from_u8(raw: u8) -> Option<Level> {
        match raw {
            0 => Some(Level::None),
            1 => Some(Level::Verbose),
            2 => Some(Level::Detail),
            3 => Some(Level::Info),
            4 => Some(Level::Warning),
            5 => Some(Level::Error),
            6 => Some(Level::Critical),
            7 => Some(Level::Fatal),
            _ => None,
        }
    }

    pub(crate) fn all() -> [Level; LEVEL_COUNT] {
        [
            Level::None,
            Level::Verbose,
            Level::Detail,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Critical,
            Level::Fatal,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag().trim())
    }
}

/*
Boilerplate notes.

Level is a fieldless enum, so Copy/Clone/Eq/Ord/Hash all make sense and are
derived. Default is deliberately not implemented: there is no level that is
a sensible default for a *message*, and the crate-wide defaults (floor,
threshold) are explicit constants instead.
*/
