//! In-memory hash index, the only read path of the store.
//!
//! A fixed array of 128 bucket chains; each chain holds at most one
//! record per key, newest keys at the front. Every chain is guarded by
//! its own read-write lock so operations on different buckets never
//! contend, and concurrent mutation of the same bucket is serialized.

use parking_lot::RwLock;

use crate::types::{Key, Record, Value, HASH_BUCKETS};

/// djb2 over the key bytes: seed 5381, `hash * 33 + byte`, 32-bit
/// wraparound. Bucket placement depends on this exact sequence.
pub fn hash_key(key: &[u8]) -> u32 {
    let mut hash: u32 = 5381;
    for &c in key {
        hash = hash.wrapping_mul(33).wrapping_add(c as u32);
    }
    hash
}

/// Bucket index for a key under the fixed bucket count.
pub fn bucket_for(key: &Key) -> usize {
    (hash_key(key.as_bytes()) % HASH_BUCKETS as u32) as usize
}

/// In-memory hash index.
pub struct HashIndex {
    buckets: [RwLock<Vec<Record>>; HASH_BUCKETS],
}

impl HashIndex {
    /// Create an empty index. Opening a store never repopulates it
    /// from the persisted files.
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| RwLock::new(Vec::new())),
        }
    }

    /// Insert or update a record.
    ///
    /// On a key match the value is overwritten in place; otherwise the
    /// record is prepended to its bucket chain. The index holds at most
    /// one record per key.
    pub fn upsert(&self, record: Record) {
        let mut chain = self.buckets[bucket_for(&record.key)].write();
        if let Some(existing) = chain.iter_mut().find(|r| r.key == record.key) {
            existing.value = record.value;
        } else {
            chain.insert(0, record);
        }
    }

    /// Latest value for a key, or `None` if absent. Linear scan of the
    /// target chain.
    pub fn lookup(&self, key: &Key) -> Option<Value> {
        self.buckets[bucket_for(key)]
            .read()
            .iter()
            .find(|r| &r.key == key)
            .map(|r| r.value.clone())
    }

    /// Unlink the record for a key. Returns whether a removal occurred.
    pub fn remove(&self, key: &Key) -> bool {
        let mut chain = self.buckets[bucket_for(key)].write();
        match chain.iter().position(|r| &r.key == key) {
            Some(pos) => {
                chain.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of records across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|chain| chain.read().len()).sum()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|chain| chain.read().is_empty())
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new()
    }
}
