//! Core types for the store.

use std::io::Write;

/// Number of buckets in the hash index.
pub const HASH_BUCKETS: usize = 128;

/// Width of the key field in a record frame, terminator included.
pub const KEY_FIELD_LEN: usize = 64;

/// Width of the value field in a record frame, terminator included.
pub const VALUE_FIELD_LEN: usize = 256;

/// Maximum key payload. One byte of the field stays zero.
pub const MAX_KEY_LEN: usize = KEY_FIELD_LEN - 1;

/// Maximum value payload. One byte of the field stays zero.
pub const MAX_VALUE_LEN: usize = VALUE_FIELD_LEN - 1;

/// On-disk size of one record frame: zero-padded key field followed by
/// zero-padded value field. No length prefix, no checksum, no header.
pub const RECORD_FRAME_LEN: usize = KEY_FIELD_LEN + VALUE_FIELD_LEN;

/// Key type - bounded-length bytes.
///
/// Input longer than [`MAX_KEY_LEN`] is truncated at construction,
/// before any logging or persistence, so the WAL, the record log and
/// the index always see the same bytes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Key(pub Vec<u8>);

impl Key {
    pub fn new(mut data: Vec<u8>) -> Self {
        data.truncate(MAX_KEY_LEN);
        Self(data)
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Key {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for Key {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Value type - bounded-length bytes, truncated to [`MAX_VALUE_LEN`]
/// at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Value(pub Vec<u8>);

impl Value {
    pub fn new(mut data: Vec<u8>) -> Self {
        data.truncate(MAX_VALUE_LEN);
        Self(data)
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Value {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// One key-value pair as stored in the index and appended to the
/// record log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub key: Key,
    pub value: Value,
}

impl Record {
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }

    /// Serialize the fixed [`RECORD_FRAME_LEN`]-byte frame to a writer.
    ///
    /// Both fields are zero-padded to their full width; the capacity
    /// bounds on [`Key`] and [`Value`] guarantee at least one trailing
    /// zero per field.
    pub fn write_frame<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        let mut frame = [0u8; RECORD_FRAME_LEN];
        frame[..self.key.len()].copy_from_slice(self.key.as_bytes());
        frame[KEY_FIELD_LEN..KEY_FIELD_LEN + self.value.len()]
            .copy_from_slice(self.value.as_bytes());
        writer.write_all(&frame)
    }
}
