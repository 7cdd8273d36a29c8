//! Vault setup progress.
//!
//! Counts which sections hold at least one entry and whether beneficiaries
//! have been set up. Reads only stored lists, so no passphrase is needed.

use serde::Serialize;

use crate::core::constants::BENEFICIARY_SETUP_KEY;
use crate::core::domain::{Section, StoredEntry};
use crate::core::store::Store;
use crate::error::{Result, VaultError};

/// Setup progress across all sections plus beneficiary setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Entry count per section, in [`Section::ALL`] order.
    pub sections: Vec<(Section, usize)>,
    /// Whether the beneficiary setup flag is set.
    pub beneficiaries: bool,
}

impl Progress {
    /// Completed steps out of [`Progress::total`].
    pub fn done(&self) -> usize {
        let filled = self.sections.iter().filter(|(_, n)| *n > 0).count();
        filled + usize::from(self.beneficiaries)
    }

    /// Number of steps: every section plus beneficiaries.
    pub fn total(&self) -> usize {
        Section::ALL.len() + 1
    }

    /// Completion as a rounded percentage.
    pub fn percent(&self) -> u8 {
        let pct = (self.done() as f64 / self.total() as f64 * 100.0).round();
        pct as u8
    }
}

/// Compute setup progress from the store.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read, or
/// `VaultError::Corrupt` if a section list is malformed.
pub fn evaluate(store: &dyn Store) -> Result<Progress> {
    let mut sections = Vec::with_capacity(Section::ALL.len());
    for section in Section::ALL {
        let key = section.store_key();
        let count = match store.get(&key)? {
            None => 0,
            Some(bytes) => serde_json::from_slice::<Vec<StoredEntry>>(&bytes)
                .map_err(|e| VaultError::Corrupt {
                    key: key.clone(),
                    reason: e.to_string(),
                })?
                .len(),
        };
        sections.push((section, count));
    }

    let beneficiaries = store
        .get(BENEFICIARY_SETUP_KEY)?
        .map(|raw| String::from_utf8_lossy(&raw).trim() == "true")
        .unwrap_or(false);

    Ok(Progress {
        sections,
        beneficiaries,
    })
}

/// Set or clear the beneficiary setup flag.
///
/// # Errors
///
/// Returns `StoreError` if the write fails.
pub fn set_beneficiaries(store: &dyn Store, done: bool) -> Result<()> {
    if done {
        store.set(BENEFICIARY_SETUP_KEY, b"true")
    } else {
        store.remove(BENEFICIARY_SETUP_KEY)
    }
}
