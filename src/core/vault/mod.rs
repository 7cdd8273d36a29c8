//! The primary interface for vault operations.
//!
//! A vault partitions encrypted entries into [`Section`]s. Each section is
//! persisted as one JSON list under `entries_<section>`; every mutation
//! writes the full updated list and only then updates the in-memory copy,
//! so a failed write never leaves memory and storage out of step.
//!
//! The passphrase is never stored. It is passed to every operation that
//! reads or changes entries, and checked against the verifier written at
//! creation time.
//!
//! A vault with an attached [`Monitor`] polls it before every write: once
//! the owner is presumed unreachable, the vault switches to
//! [`AccessMode::BeneficiaryRelease`] and refuses owner changes until the
//! owner confirms again. Listing stays available in both modes.

mod entries;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::cipher::{self, Envelope};
use crate::core::constants::{VAULT_META_KEY, VERIFIER_CANARY};
use crate::core::domain::{AccessMode, Section, StoredEntry};
use crate::core::kdf::KdfParams;
use crate::core::monitor::Monitor;
use crate::core::store::Store;
use crate::core::types::SealedEnvelope;
use crate::core::validation::validate_passphrase;
use crate::error::{AuthError, Result, VaultError};

const META_VERSION: u32 = 1;

/// Persisted under `vaultMeta`.
#[derive(Debug, Serialize, Deserialize)]
struct VaultMeta {
    version: u32,
    iterations: u32,
    check: SealedEnvelope,
}

/// Encrypted entry vault over a [`Store`].
pub struct Vault {
    store: Arc<dyn Store>,
    params: KdfParams,
    check: Envelope,
    sections: HashMap<Section, Vec<StoredEntry>>,
    generations: HashMap<Section, u64>,
    monitor: Option<Monitor>,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("params", &self.params)
            .field("loaded_sections", &self.sections.keys().collect::<Vec<_>>())
            .field("gated", &self.monitor.is_some())
            .finish()
    }
}

impl Vault {
    /// Create a new vault protected by `passphrase`.
    ///
    /// Writes the vault metadata: the KDF iteration count and a verifier
    /// envelope used to check the passphrase later.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::AlreadyInitialized` if the store already holds a
    /// vault, `ValidationError::EmptyPassphrase` for an empty passphrase, or
    /// `StoreError` if the metadata cannot be written.
    pub fn create(store: Arc<dyn Store>, passphrase: &str, iterations: u32) -> Result<Self> {
        validate_passphrase(passphrase)?;
        if store.get(VAULT_META_KEY)?.is_some() {
            return Err(VaultError::AlreadyInitialized.into());
        }

        let params = KdfParams::new(iterations)?;
        let check = cipher::encrypt(VERIFIER_CANARY, passphrase, &params)?;
        let meta = VaultMeta {
            version: META_VERSION,
            iterations,
            check: check.seal()?,
        };
        store.set(VAULT_META_KEY, &serde_json::to_vec(&meta)?)?;

        info!(iterations, "vault created");

        Ok(Self {
            store,
            params,
            check,
            sections: HashMap::new(),
            generations: HashMap::new(),
            monitor: None,
        })
    }

    /// Open an existing vault.
    ///
    /// Does not require the passphrase; sections are loaded lazily.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotInitialized` if no vault metadata exists, or
    /// `VaultError::Corrupt` if it cannot be decoded.
    pub fn open(store: Arc<dyn Store>) -> Result<Self> {
        let raw = store
            .get(VAULT_META_KEY)?
            .ok_or(VaultError::NotInitialized)?;

        let meta: VaultMeta = serde_json::from_slice(&raw).map_err(|e| corrupt(VAULT_META_KEY, e))?;
        if meta.version != META_VERSION {
            return Err(corrupt(
                VAULT_META_KEY,
                format!("unsupported version {}", meta.version),
            )
            .into());
        }
        let params = KdfParams::new(meta.iterations)?;
        let check = Envelope::parse(&meta.check).map_err(|e| corrupt(VAULT_META_KEY, e))?;

        debug!(iterations = params.iterations, "vault opened");

        Ok(Self {
            store,
            params,
            check,
            sections: HashMap::new(),
            generations: HashMap::new(),
            monitor: None,
        })
    }

    /// Check whether `passphrase` is the one this vault was created with.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPassphrase` on mismatch.
    pub fn verify_passphrase(&self, passphrase: &str) -> Result<()> {
        validate_passphrase(passphrase)?;
        match cipher::decrypt(&self.check, passphrase, &self.params) {
            Ok(text) if text.as_str() == VERIFIER_CANARY => Ok(()),
            Ok(_) => Err(AuthError::InvalidPassphrase.into()),
            Err(e) if e.is_decryption() => Err(AuthError::InvalidPassphrase.into()),
            Err(e) => Err(e),
        }
    }

    /// Gate owner writes on the life-confirmation `monitor`.
    pub fn with_monitor(mut self, monitor: Monitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// The attached monitor, if any.
    pub fn monitor(&self) -> Option<&Monitor> {
        self.monitor.as_ref()
    }

    /// Who may use the vault at `now`.
    ///
    /// Always [`AccessMode::Owner`] when no monitor is attached.
    pub fn access(&self, now: DateTime<Utc>) -> AccessMode {
        match &self.monitor {
            Some(monitor) => monitor.current_status(now).access_mode(),
            None => AccessMode::Owner,
        }
    }

    /// Key derivation parameters recorded for this vault.
    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    // Section cache

    fn generation(&self, section: Section) -> u64 {
        self.generations.get(&section).copied().unwrap_or(0)
    }

    fn bump_generation(&mut self, section: Section) {
        *self.generations.entry(section).or_insert(0) += 1;
    }

    fn require_owner(&self, now: DateTime<Utc>) -> Result<()> {
        if self.access(now) == AccessMode::BeneficiaryRelease {
            warn!("owner write refused in beneficiary-release mode");
            return Err(VaultError::ReleaseMode.into());
        }
        Ok(())
    }

    fn loaded(&mut self, section: Section) -> Result<&[StoredEntry]> {
        if !self.sections.contains_key(&section) {
            let entries = load_section(self.store.as_ref(), section)?;
            self.sections.insert(section, entries);
        }
        Ok(self
            .sections
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Persist `entries` as the new contents of `section`, then adopt them.
    fn commit(&mut self, section: Section, entries: Vec<StoredEntry>) -> Result<()> {
        let bytes = serde_json::to_vec(&entries)?;
        self.store.set(&section.store_key(), &bytes)?;
        debug!(%section, count = entries.len(), "section persisted");
        self.sections.insert(section, entries);
        Ok(())
    }
}

fn load_section(store: &dyn Store, section: Section) -> Result<Vec<StoredEntry>> {
    let key = section.store_key();
    match store.get(&key)? {
        None => Ok(Vec::new()),
        Some(bytes) => {
            let entries: Vec<StoredEntry> =
                serde_json::from_slice(&bytes).map_err(|e| corrupt(&key, e))?;
            debug!(%section, count = entries.len(), "section loaded");
            Ok(entries)
        }
    }
}

fn corrupt(key: &str, reason: impl std::fmt::Display) -> VaultError {
    VaultError::Corrupt {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
