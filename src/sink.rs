// SPDX-License-Identifier: MIT OR Apache-2.0

//! The writable destination a [`Logger`](crate::Logger) appends lines to.

use std::fmt::Debug;
use std::io;
use std::path::PathBuf;

/// A line-oriented log destination.
///
/// The logger serializes access: `write_line` and `flush` are only ever
/// called while the logger's sink lock is held, so implementations need no
/// locking of their own. A sink appends the line terminator itself.
pub trait Sink: Debug + Send {
    /// Appends `line` followed by the sink's line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Pushes buffered lines to the destination.
    fn flush(&mut self) -> io::Result<()>;

    /// Best-effort probe of the space left at the destination, in bytes.
    ///
    /// `None` means the sink cannot tell; the logger then skips the
    /// space check.
    fn available_space(&self) -> Option<u64> {
        None
    }
}

/// The sink could not be opened.
#[derive(Debug, thiserror::Error)]
#[error("cannot open log file {}: {source}", path.display())]
pub struct OpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
