// SPDX-License-Identifier: MIT OR Apache-2.0

//! The file-backed sink.

use crate::sink::{OpenError, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends log lines to a file.
///
/// Lines are buffered and pushed out by the logger's flush after each
/// message, so a crash loses at most the line being written.
#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Opens (and creates if missing) the file at `path`.
    ///
    /// With `append` the existing content is kept; otherwise the file is
    /// truncated.
    pub fn open(path: impl AsRef<Path>, append: bool) -> Result<FileSink, OpenError> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(&path).map_err(|source| OpenError {
            path: path.clone(),
            source,
        })?;
        Ok(FileSink {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    #[cfg(unix)]
    fn available_space(&self) -> Option<u64> {
        use std::os::unix::ffi::OsStrExt;

        let path = std::ffi::CString::new(self.path.as_os_str().as_bytes()).ok()?;
        let mut vfs: libc::statvfs = unsafe { std::mem::zeroed() };
        // SAFETY: path is a valid NUL-terminated string and vfs is writable.
        if unsafe { libc::statvfs(path.as_ptr(), &mut vfs) } != 0 {
            return None;
        }
        Some(vfs.f_bavail as u64 * vfs.f_frsize as u64)
    }
}
