//! Write-ahead log of operation intents and transaction markers.
//!
//! One text line per event, flushed immediately after each write:
//! `PUT <key> <value>`, `DELETE <key>`, and the bare markers `BEGIN`,
//! `COMMIT`, `ROLLBACK`. Lines are written before the matching record
//! log or index mutation. The log is never replayed on open; it is an
//! audit trail only. Keys and values containing spaces are not escaped.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::{Key, Value};

/// Transaction boundary markers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TxnMarker {
    Begin,
    Commit,
    Rollback,
}

impl TxnMarker {
    fn as_str(self) -> &'static str {
        match self {
            TxnMarker::Begin => "BEGIN",
            TxnMarker::Commit => "COMMIT",
            TxnMarker::Rollback => "ROLLBACK",
        }
    }
}

/// Append-only write-ahead log.
pub struct WriteAheadLog {
    writer: BufWriter<File>,
    path: String,
}

impl WriteAheadLog {
    /// Create or open a WAL file for appending.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path_str,
        })
    }

    /// Log a put intent: `PUT <key> <value>`.
    pub fn log_put(&mut self, key: &Key, value: &Value) -> Result<(), std::io::Error> {
        self.writer.write_all(b"PUT ")?;
        self.writer.write_all(key.as_bytes())?;
        self.writer.write_all(b" ")?;
        self.writer.write_all(value.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Log a delete intent: `DELETE <key>`.
    pub fn log_delete(&mut self, key: &Key) -> Result<(), std::io::Error> {
        self.writer.write_all(b"DELETE ")?;
        self.writer.write_all(key.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Log a transaction boundary marker on its own line.
    pub fn log_marker(&mut self, marker: TxnMarker) -> Result<(), std::io::Error> {
        self.writer.write_all(marker.as_str().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Flush any buffered bytes. Called once more on store close.
    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        self.writer.flush()
    }

    /// Get the WAL file path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn get_temp_path() -> String {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
        format!("/tmp/kvcore_wal_test_{}.log", since_epoch.as_nanos())
    }

    #[test]
    fn test_wal_line_format() {
        let path = get_temp_path();

        {
            let mut wal = WriteAheadLog::open(&path).unwrap();
            wal.log_marker(TxnMarker::Begin).unwrap();
            wal.log_put(&Key::from("foo"), &Value::from("Hello, World!"))
                .unwrap();
            wal.log_delete(&Key::from("foo")).unwrap();
            wal.log_marker(TxnMarker::Commit).unwrap();
            wal.log_marker(TxnMarker::Rollback).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN",
                "PUT foo Hello, World!",
                "DELETE foo",
                "COMMIT",
                "ROLLBACK",
            ]
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_wal_lines_appear_in_call_order() {
        let path = get_temp_path();

        {
            let mut wal = WriteAheadLog::open(&path).unwrap();
            for i in 0..10 {
                let key = format!("key{}", i);
                wal.log_put(&Key::from(key.as_str()), &Value::from("v"))
                    .unwrap();
            }
        }

        let content = std::fs::read_to_string(&path).unwrap();
        for (i, line) in content.lines().enumerate() {
            assert_eq!(line, format!("PUT key{} v", i));
        }

        let _ = std::fs::remove_file(path);
    }
}
