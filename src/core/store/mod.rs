//! Key-value persistence.
//!
//! The vault and the life-confirmation monitor persist through the [`Store`]
//! trait and never touch files directly. Values are opaque bytes; callers
//! choose the encoding (JSON for entry lists and settings, RFC 3339 text for
//! timestamps).
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `sqlite.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Cloud { /* ... */ }
//!
//! impl Store for Cloud {
//!     fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
//!         // Fetch from cloud
//!     }
//!     fn set(&self, key: &str, value: &[u8]) -> Result<()> {
//!         // Upload to cloud
//!     }
//!     fn remove(&self, key: &str) -> Result<()> {
//!         // Delete from cloud
//!     }
//! }
//! ```

use crate::error::{Result, StoreError};

mod backend;
mod deadline;
mod fs;
mod memory;

pub use backend::default_backend;
pub use deadline::Deadline;
pub use fs::Filesystem;
pub use memory::Memory;

/// Key-value storage trait.
///
/// A `set` either fully replaces the value or fails; implementations must
/// not expose partial writes.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `None` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the removal fails.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: Store + ?Sized> Store for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Validate a store key.
///
/// Keys are limited to ASCII letters, digits, and underscore so that every
/// backend can map them to file names or column values unchanged.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(StoreError::InvalidKey(key.to_string()).into());
    }
    Ok(())
}
