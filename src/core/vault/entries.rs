//! Entry operations.
//!
//! Add, list and remove entries within a section.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::Vault;
use crate::core::cipher::{self, Envelope};
use crate::core::domain::{DecryptFailure, Entry, EntryHandle, Listing, Section, StoredEntry};
use crate::core::validation::{validate_content, validate_title};
use crate::error::{CipherError, Error, Result, VaultError};

impl Vault {
    /// Add an entry to `section`.
    ///
    /// Verifies the passphrase, encrypts `content`, appends the entry and
    /// persists the section. The in-memory section changes only after the
    /// store accepts the write. The title is stored exactly as given.
    ///
    /// # Arguments
    ///
    /// * `section` - Target section
    /// * `title` - Owner-assigned title, stored in clear
    /// * `content` - Plaintext to encrypt
    /// * `passphrase` - The vault passphrase
    ///
    /// # Returns
    ///
    /// A handle for removing the entry later in this session.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank title or empty content,
    /// `AuthError::InvalidPassphrase` for a wrong passphrase,
    /// `VaultError::ReleaseMode` once the owner is presumed unreachable, or
    /// `StoreError` if persisting fails.
    pub fn add_entry(
        &mut self,
        section: Section,
        title: &str,
        content: &str,
        passphrase: &str,
    ) -> Result<EntryHandle> {
        self.add_entry_at(section, title, content, passphrase, Utc::now())
    }

    /// Add an entry with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Same as [`Vault::add_entry`].
    pub fn add_entry_at(
        &mut self,
        section: Section,
        title: &str,
        content: &str,
        passphrase: &str,
        created_at: DateTime<Utc>,
    ) -> Result<EntryHandle> {
        validate_title(title)?;
        validate_content(title, content)?;
        self.verify_passphrase(passphrase)?;
        self.require_owner(created_at)?;

        let sealed = cipher::encrypt(content, passphrase, &self.params)?.seal()?;

        let mut next = self.loaded(section)?.to_vec();
        next.push(StoredEntry {
            title: title.to_string(),
            content: sealed,
            created_at,
        });
        let index = next.len() - 1;
        self.commit(section, next)?;

        info!(%section, index, "entry added");
        Ok(EntryHandle::new(section, index, self.generation(section)))
    }

    /// Decrypt every entry in `section`.
    ///
    /// Entries that fail to decrypt are reported in [`Listing::failures`]
    /// and do not prevent the others from being returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the section cannot be read, or
    /// `VaultError::Corrupt` if the stored list is not valid JSON.
    pub fn list_entries(&mut self, section: Section, passphrase: &str) -> Result<Listing> {
        let params = self.params;
        let stored = self.loaded(section)?;

        let mut entries = Vec::with_capacity(stored.len());
        let mut failures = Vec::new();

        for (index, record) in stored.iter().enumerate() {
            let opened = Envelope::parse(&record.content)
                .and_then(|envelope| cipher::decrypt(&envelope, passphrase, &params));
            match opened {
                Ok(content) => entries.push(Entry {
                    index,
                    title: record.title.clone(),
                    content,
                    created_at: record.created_at,
                }),
                Err(e) => failures.push(DecryptFailure {
                    index,
                    title: record.title.clone(),
                    created_at: record.created_at,
                    error: as_cipher_error(e),
                }),
            }
        }

        if !failures.is_empty() {
            warn!(%section, failed = failures.len(), "some entries could not be decrypted");
        }
        debug!(%section, count = entries.len(), "entries listed");

        Ok(Listing {
            section,
            entries,
            failures,
        })
    }

    /// Remove the entry currently at `index` in `section`.
    ///
    /// Later entries shift down by one. The passphrase is checked against
    /// the vault verifier; the remaining entries are persisted in their
    /// encrypted form and nothing is decrypted.
    ///
    /// # Returns
    ///
    /// The removed record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPassphrase` for a wrong passphrase,
    /// `VaultError::ReleaseMode` once the owner is presumed unreachable,
    /// `VaultError::IndexOutOfRange` if `index` is not below the current
    /// section length, or `StoreError` if persisting fails (the entry then
    /// stays in place).
    pub fn remove_entry(
        &mut self,
        section: Section,
        index: usize,
        passphrase: &str,
    ) -> Result<StoredEntry> {
        self.verify_passphrase(passphrase)?;
        self.require_owner(Utc::now())?;

        let current = self.loaded(section)?;
        if index >= current.len() {
            return Err(VaultError::IndexOutOfRange {
                section,
                index,
                len: current.len(),
            }
            .into());
        }

        let mut next = current.to_vec();
        let removed = next.remove(index);
        self.commit(section, next)?;
        self.bump_generation(section);

        info!(%section, index, "entry removed");
        Ok(removed)
    }

    /// Remove the entry a handle refers to.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::StaleHandle` if the section changed by removal or
    /// reload since the handle was issued, otherwise as
    /// [`Vault::remove_entry`].
    pub fn remove(&mut self, handle: EntryHandle, passphrase: &str) -> Result<StoredEntry> {
        let section = handle.section();
        if handle.generation() != self.generation(section) {
            return Err(VaultError::StaleHandle(section).into());
        }
        self.remove_entry(section, handle.index(), passphrase)
    }

    /// Stored (still encrypted) entries of `section`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` or `VaultError::Corrupt` if the section cannot be loaded.
    pub fn stored(&mut self, section: Section) -> Result<&[StoredEntry]> {
        self.loaded(section)
    }

    /// Number of entries in `section`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` or `VaultError::Corrupt` if the section cannot be loaded.
    pub fn len(&mut self, section: Section) -> Result<usize> {
        Ok(self.loaded(section)?.len())
    }

    /// Whether `section` holds no entries.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` or `VaultError::Corrupt` if the section cannot be loaded.
    pub fn is_empty(&mut self, section: Section) -> Result<bool> {
        Ok(self.len(section)? == 0)
    }

    /// Discard the cached copy of `section` and read it again from the store.
    ///
    /// Invalidates handles issued for the section.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` or `VaultError::Corrupt` if the section cannot be loaded.
    pub fn reload(&mut self, section: Section) -> Result<()> {
        let entries = super::load_section(self.store.as_ref(), section)?;
        self.sections.insert(section, entries);
        self.bump_generation(section);
        Ok(())
    }
}

fn as_cipher_error(error: Error) -> CipherError {
    match error {
        Error::Cipher(e) => e,
        other => CipherError::DecryptionFailed(other.to_string()),
    }
}
