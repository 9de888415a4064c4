//! Transaction boundary gate.
//!
//! A single exclusive lock guarding only the span between a `begin`
//! and its matching `commit`/`rollback`. Plain puts, gets and deletes
//! never touch it. The gate is non-reentrant: a second `begin` issued
//! by the holder blocks forever, since nothing releases the lock on
//! its behalf.

use parking_lot::{Condvar, Mutex};

/// Two-state gate: idle or in-transaction.
pub struct TransactionGate {
    in_transaction: Mutex<bool>,
    released: Condvar,
}

impl TransactionGate {
    pub fn new() -> Self {
        Self {
            in_transaction: Mutex::new(false),
            released: Condvar::new(),
        }
    }

    /// Block until the gate is idle, then hold it. No timeout exists;
    /// a blocked acquisition waits indefinitely.
    pub fn acquire(&self) {
        let mut held = self.in_transaction.lock();
        while *held {
            self.released.wait(&mut held);
        }
        *held = true;
    }

    /// Return the gate to idle and wake one blocked `acquire`.
    /// Releasing an idle gate is a no-op.
    pub fn release(&self) {
        let mut held = self.in_transaction.lock();
        *held = false;
        self.released.notify_one();
    }
}

impl Default for TransactionGate {
    fn default() -> Self {
        Self::new()
    }
}
