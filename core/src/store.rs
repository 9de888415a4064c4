//! Store facade - owns the index, both log files and the transaction
//! gate, and wires the write-ahead ordering between them.

use std::path::Path;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::index::HashIndex;
use crate::record_log::RecordLog;
use crate::txn::TransactionGate;
use crate::types::{Key, Record, Value};
use crate::wal::{TxnMarker, WriteAheadLog};

/// Embedded key-value store.
///
/// All operations take `&self`, so one store may be shared across
/// threads. Only `begin`/`commit`/`rollback` touch the transaction
/// gate; `put`, `get` and `delete` run without it and synchronize on
/// the per-bucket index locks and the file mutexes instead.
pub struct Store {
    index: HashIndex,
    data: Mutex<RecordLog>,
    wal: Mutex<WriteAheadLog>,
    gate: TransactionGate,
}

impl Store {
    /// Open (creating if absent) the record log and WAL files.
    ///
    /// The index always starts empty: neither file is read back, so
    /// keys stored by a previous process are not visible after a
    /// reopen. The persisted files are an audit trail, not a recovery
    /// source. If the WAL fails to open, the already-opened record log
    /// handle is dropped before the error is returned.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(data_path: P, log_path: Q) -> Result<Self> {
        let data = RecordLog::open(&data_path).map_err(|source| StoreError::FileOpen {
            path: data_path.as_ref().to_path_buf(),
            source,
        })?;
        let wal = WriteAheadLog::open(&log_path).map_err(|source| StoreError::FileOpen {
            path: log_path.as_ref().to_path_buf(),
            source,
        })?;

        debug!("opened store: data={} wal={}", data.path(), wal.path());

        Ok(Self {
            index: HashIndex::new(),
            data: Mutex::new(data),
            wal: Mutex::new(wal),
            gate: TransactionGate::new(),
        })
    }

    /// Insert or overwrite a key.
    ///
    /// Write-ahead ordering: the WAL `PUT` line is written and flushed
    /// first, then the record frame is appended, then the index is
    /// updated. If the append fails the index is left unmodified; the
    /// WAL line already written is not rescinded, so the WAL can record
    /// an intent that was never realized in the index.
    pub fn put(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let record = Record::new(key.into(), value.into());

        self.wal.lock().log_put(&record.key, &record.value)?;
        self.data.lock().append(&record)?;

        debug!("PUT {:?}", record.key);
        self.index.upsert(record);
        Ok(())
    }

    /// Look up a key. Reads only the index; the persisted files are
    /// never consulted.
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        self.index.lookup(&key.into())
    }

    /// Remove a key from the index. Returns whether the key existed.
    ///
    /// The WAL `DELETE` line is written unconditionally, even for an
    /// absent key. The record log is not touched: no tombstone is
    /// appended and old frames stay in place.
    pub fn delete(&self, key: impl Into<Key>) -> Result<bool> {
        let key = key.into();

        self.wal.lock().log_delete(&key)?;

        debug!("DELETE {:?}", key);
        Ok(self.index.remove(&key))
    }

    /// Start a transaction: block until the gate is free, then write
    /// and flush the `BEGIN` marker.
    pub fn begin(&self) -> Result<()> {
        self.gate.acquire();
        self.wal.lock().log_marker(TxnMarker::Begin)?;
        Ok(())
    }

    /// Commit: write and flush the `COMMIT` marker, then release the
    /// gate.
    pub fn commit(&self) -> Result<()> {
        self.wal.lock().log_marker(TxnMarker::Commit)?;
        self.gate.release();
        Ok(())
    }

    /// Roll back: write and flush the `ROLLBACK` marker, then release
    /// the gate.
    ///
    /// Marker-only: puts and deletes performed since the matching
    /// `begin` stay in effect. No prior-value snapshot is kept, so
    /// nothing is restored in the index or the record log.
    pub fn rollback(&self) -> Result<()> {
        self.wal.lock().log_marker(TxnMarker::Rollback)?;
        self.gate.release();
        Ok(())
    }

    /// Number of keys currently in the index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Flush both files and drop the store. Consuming `self` makes any
    /// use after close a compile error.
    pub fn close(self) -> Result<()> {
        self.data.lock().flush()?;
        self.wal.lock().flush()?;
        Ok(())
    }
}
