// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run-time selection of the optional fields in a log line.
//!
//! Which fields a line carries is a flag vector, not a format string: the
//! composer walks a fixed field order and renders only the enabled flags.
//! Presets assign whole vectors at once; individual flags can still be
//! toggled afterwards.

use bitflags::bitflags;

bitflags! {
    /// One flag per optional log line field, in composition order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Fields: u16 {
        /// Seconds elapsed since the logger was created, 3 decimals.
        const TIME = 1 << 0;
        /// Calendar date and wall-clock time.
        const DATE = 1 << 1;
        /// The fixed-width level tag.
        const LEVEL = 1 << 2;
        /// Executable file name.
        const EXEC = 1 << 3;
        /// Process id.
        const PID = 1 << 4;
        /// User id, `?` on platforms without the concept.
        const UID = 1 << 5;
        /// User name.
        const USER = 1 << 6;
        /// Source file name without its directory.
        const FILE_NAME = 1 << 7;
        /// Full source file path.
        const FILE_PATH = 1 << 8;
        /// Enclosing function name.
        const FUNC_NAME = 1 << 9;
        /// Full path of the enclosing function, the closest thing to a
        /// signature the language gives us.
        const FUNC_SIG = 1 << 10;
        /// Source line number.
        const LINE = 1 << 11;
        /// The free-form message body supplied by the caller.
        const MESSAGE = 1 << 12;
    }
}

/// Named flag-vector presets.
///
/// Each preset is a complete assignment; applying one replaces every flag,
/// so applying the same preset twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Date, level tag and message. The initial configuration.
    Default,
    /// Adds elapsed time and the executable name.
    Detailed,
    /// Identity-heavy: executable, pid, uid, user and file location.
    System,
    /// Source-oriented: file, function and line.
    Debug,
    /// Everything.
    Verbose,
}

impl Fields {
    /// The vector selected by a [`Preset`].
    pub const fn preset(preset: Preset) -> Fields {
        match preset {
            Preset::Default => Fields::DATE
                .union(Fields::LEVEL)
                .union(Fields::MESSAGE),
            Preset::Detailed => Fields::TIME
                .union(Fields::DATE)
                .union(Fields::LEVEL)
                .union(Fields::EXEC)
                .union(Fields::MESSAGE),
            Preset::System => Fields::DATE
                .union(Fields::LEVEL)
                .union(Fields::EXEC)
                .union(Fields::PID)
                .union(Fields::UID)
                .union(Fields::USER)
                .union(Fields::FILE_NAME)
                .union(Fields::FILE_PATH)
                .union(Fields::MESSAGE),
            Preset::Debug => Fields::LEVEL
                .union(Fields::EXEC)
                .union(Fields::FILE_NAME)
                .union(Fields::FUNC_NAME)
                .union(Fields::LINE)
                .union(Fields::MESSAGE),
            Preset::Verbose => Fields::all(),
        }
    }
}

impl Default for Fields {
    fn default() -> Self {
        Fields::preset(Preset::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_default_preset() {
        assert_eq!(Fields::default(), Fields::preset(Preset::Default));
        assert_eq!(
            Fields::default(),
            Fields::DATE | Fields::LEVEL | Fields::MESSAGE
        );
    }

    #[test]
    fn presets_are_idempotent() {
        for preset in [
            Preset::Default,
            Preset::Detailed,
            Preset::System,
            Preset::Debug,
            Preset::Verbose,
        ] {
            let once = Fields::preset(preset);
            let twice = Fields::preset(preset);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn verbose_enables_everything() {
        assert_eq!(Fields::preset(Preset::Verbose), Fields::all());
    }

    #[test]
    fn individual_flags_compose_with_presets() {
        let mut fields = Fields::preset(Preset::Default);
        fields.insert(Fields::PID);
        assert!(fields.contains(Fields::PID));
        assert!(fields.contains(Fields::DATE));
        fields.remove(Fields::DATE);
        assert!(!fields.contains(Fields::DATE));
    }
}
