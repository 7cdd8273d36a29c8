//! In-memory store.
//!
//! Used for tests and headless embedding. Failures can be injected to
//! exercise persistence error paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::{validate_key, Store};
use crate::error::{Result, StoreError};

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct Memory {
    values: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl Memory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get` fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set`/`remove` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        // A poisoned map is still structurally valid; every write is a single insert.
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn injected(key: &str, op: &str) -> std::io::Error {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("injected {} failure for {}", op, key),
        )
    }
}

impl Store for Memory {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read {
                key: key.to_string(),
                source: Self::injected(key, "read"),
            }
            .into());
        }
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                key: key.to_string(),
                source: Self::injected(key, "write"),
            }
            .into());
        }
        self.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Remove {
                key: key.to_string(),
                source: Self::injected(key, "remove"),
            }
            .into());
        }
        self.lock().remove(key);
        Ok(())
    }
}
