//! Append-only binary persistence of accepted writes.
//!
//! Every accepted put is appended as one fixed-size frame and flushed
//! before the call returns. The log is write-only in normal operation:
//! reads never consult it, deletes never touch it, and superseded
//! frames are never reclaimed. Rebuilding state from it would need a
//! replay step that this store does not implement.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::Record;

/// Append-only record log.
pub struct RecordLog {
    writer: BufWriter<File>,
    path: String,
}

impl RecordLog {
    /// Create or open the data file for appending.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path_str,
        })
    }

    /// Append one record frame and flush it.
    pub fn append(&mut self, record: &Record) -> Result<(), std::io::Error> {
        record.write_frame(&mut self.writer)?;
        self.writer.flush()
    }

    /// Flush any buffered bytes. Called once more on store close.
    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        self.writer.flush()
    }

    /// Get the data file path.
    pub fn path(&self) -> &str {
        &self.path
    }
}
