// SPDX-License-Identifier: MIT OR Apache-2.0

//! The line composer: renders the enabled fields into a line prefix.
//!
//! Field order is fixed; the [`Fields`](crate::Fields) vector only decides
//! which of them appear. Every rendered field is followed by two spaces,
//! disabled fields contribute nothing at all, and the prefix always ends
//! with `": "` ahead of the caller's message body.

use crate::fields::Fields;
use crate::identity::IdentityProvider;
use crate::record::LogRecord;
use crate::Level;
use std::time::Duration;

/// Two spaces between rendered fields.
const SEPARATOR: &str = "  ";

/// The fixed-width rule line used by column titles and block separators.
pub(crate) const RULE: &str = "--------------------------------------------------";

/// Where a log statement lives in the source.
///
/// Captured by the logging macros via `file!()`, `line!()` and the
/// function-path trick; the composer derives the short file and function
/// names from the full paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The full path as given by `file!()`.
    pub fn file_path(&self) -> &'static str {
        self.file
    }

    /// The file name without its directory.
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The full module path of the enclosing function.
    ///
    /// Stands in for a signature, which the language cannot name.
    pub fn function_signature(&self) -> &'static str {
        self.function
    }

    /// The bare function name, the last path segment.
    pub fn function_name(&self) -> &'static str {
        self.function
            .rsplit("::")
            .next()
            .unwrap_or(self.function)
    }
}

/// Appends the enabled header fields to `record`, ending with `": "`.
pub(crate) fn compose_header(
    record: &mut LogRecord,
    fields: Fields,
    level: Level,
    site: &CallSite,
    identity: &dyn IdentityProvider,
    elapsed: Duration,
) {
    if fields.contains(Fields::TIME) {
        record.log_owned(format!("{:7.3}{}", elapsed.as_secs_f64(), SEPARATOR));
    }
    if fields.contains(Fields::DATE) {
        record.log_owned(format!(
            "{}{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            SEPARATOR
        ));
    }
    if fields.contains(Fields::LEVEL) {
        record.log(level.tag());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::EXEC) {
        record.log_owned(identity.executable());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::PID) {
        record.log_owned(identity.pid());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::UID) {
        record.log_owned(identity.uid());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::USER) {
        record.log_owned(identity.user_name());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::FILE_NAME) {
        record.log(site.file_name());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::FILE_PATH) {
        record.log(site.file_path());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::FUNC_NAME) {
        record.log(site.function_name());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::FUNC_SIG) {
        record.log(site.function_signature());
        record.log(SEPARATOR);
    }
    if fields.contains(Fields::LINE) {
        record.log_owned(format!("{}{}", site.line(), SEPARATOR));
    }
    record.log(": ");
}

/// The human-readable column names for the enabled fields, framed by rule
/// lines. Printed once at the start of a log file.
pub(crate) fn compose_column_titles(fields: Fields) -> String {
    let titles = [
        (Fields::TIME, "Time"),
        (Fields::DATE, "Date"),
        (Fields::LEVEL, "Level"),
        (Fields::EXEC, "Executable"),
        (Fields::PID, "PID"),
        (Fields::UID, "UID"),
        (Fields::USER, "User"),
        (Fields::FILE_NAME, "Filename"),
        (Fields::FILE_PATH, "Filepath"),
        (Fields::FUNC_NAME, "Function"),
        (Fields::FUNC_SIG, "Function_signature"),
        (Fields::LINE, "Line"),
    ];
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    for (flag, title) in titles {
        if fields.contains(flag) {
            out.push_str(title);
            out.push_str(SEPARATOR);
        }
    }
    out.push('\n');
    out.push_str(RULE);
    out
}

/// `Date: <ctime-style string>` with a leading blank line.
pub(crate) fn compose_date_stamp() -> String {
    format!(
        "\nDate: {}",
        chrono::Local::now().format("%a %b %e %H:%M:%S %Y")
    )
}
