//! Embedded hash-indexed key-value store.
//!
//! Architecture:
//! - HashIndex: fixed 128-bucket in-memory index, the only read path
//! - RecordLog: append-only binary file of every accepted write
//! - WriteAheadLog: append-only text log of intents and markers
//! - TransactionGate: exclusive lock spanning begin..commit/rollback
//! - Store: facade owning all four
//!
//! The persisted files are durability artifacts, not a recovery
//! source: no replay happens on open and every store starts with an
//! empty index.

pub mod error;
pub mod index;
pub mod record_log;
pub mod store;
pub mod txn;
pub mod types;
pub mod wal;

pub use error::{Result, StoreError};
pub use index::HashIndex;
pub use record_log::RecordLog;
pub use store::Store;
pub use txn::TransactionGate;
pub use types::{Key, Record, Value};
pub use wal::{TxnMarker, WriteAheadLog};
