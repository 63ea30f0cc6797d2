//! Rotating trace file writer.
//!
//! This module provides a thread-safe file writer that rotates the trace
//! file when it exceeds a size threshold, keeping a fixed number of backups
//! so trace output never grows without bound.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum trace file size before rotation (10 MB).
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated backups to keep.
const BACKUPS_KEPT: usize = 3;

/// Thread-safe rotating file writer.
///
/// Each write checks the current file size first. Once the file passes
/// [`ROTATE_AT_BYTES`] it is renamed with a Unix-timestamp suffix, a fresh
/// file takes its place, and backups beyond [`BACKUPS_KEPT`] are deleted.
///
/// The file handle is opened lazily on first write and guarded by a `Mutex`,
/// so a single writer can be shared across threads.
pub struct TraceFileWriter {
    /// Path of the active trace file.
    path: PathBuf,
    /// Open handle, populated on first write.
    handle: Mutex<Option<File>>,
}

impl TraceFileWriter {
    /// Creates a writer for the given path without touching the filesystem.
    ///
    /// The file is opened on the first [`append_line`](Self::append_line)
    /// call, so construction succeeds even when the path is not yet writable.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line to the trace file, rotating first if it grew too big.
    ///
    /// The line is written with a trailing newline and flushed immediately so
    /// traces survive an abrupt exit.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` when rotation, opening, writing, or flushing
    /// fails, or when the guarding mutex was poisoned by a panicking thread.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer mutex poisoned: {e}")))?;

        self.rotate_if_oversized(&mut handle)?;

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()?;
        drop(handle);

        Ok(())
    }

    /// Closes the handle and rotates when the file passed the size threshold.
    fn rotate_if_oversized(&self, handle: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            if metadata.len() > ROTATE_AT_BYTES {
                *handle = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    /// Renames the active file to a timestamped backup and prunes old ones.
    ///
    /// Backups are named `<stem>.json.<unix_timestamp>`, for example
    /// `pixquest-otlp.json.1234567890`.
    fn rotate(&self) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let backup = self.path.with_extension(format!("json.{timestamp}"));

        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }

        self.prune_backups()?;

        Ok(())
    }

    /// Deletes backups beyond the retention limit, newest kept first.
    ///
    /// Individual deletion failures are ignored so one stuck file cannot
    /// stall the rest of the cleanup.
    fn prune_backups(&self) -> io::Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| io::Error::other("trace file has no parent directory"))?;

        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::other("trace file has no valid name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for stale in backups.iter().skip(BACKUPS_KEPT) {
            let _ = fs::remove_file(stale);
        }

        Ok(())
    }
}

impl std::fmt::Debug for TraceFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceFileWriter")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_the_file_and_adds_a_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = TraceFileWriter::new(path.clone());

        writer.append_line("{\"a\":1}").unwrap();
        writer.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn oversized_file_is_rotated_before_the_next_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        fs::write(&path, vec![b'x'; (ROTATE_AT_BYTES + 1) as usize]).unwrap();
        let writer = TraceFileWriter::new(path.clone());

        writer.append_line("{\"fresh\":true}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"fresh\":true}\n");
        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".json."))
            .count();
        assert_eq!(backups, 1);
    }
}
