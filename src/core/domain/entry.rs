//! Entry types.
//!
//! An entry is one secret record inside a section. It is never mutated in
//! place: changes are a removal followed by a new entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::Section;
use crate::core::types::{SealedEnvelope, Title};

/// A decrypted entry.
pub struct Entry {
    /// Position in the section at the time it was read.
    pub index: usize,
    /// Owner-assigned title (stored in clear).
    pub title: Title,
    /// Decrypted content, wiped from memory on drop.
    pub content: Zeroizing<String>,
    /// Creation time, immutable.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("index", &self.index)
            .field("title", &self.title)
            .field("content", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// An entry as persisted: content is an envelope serialized to JSON.
///
/// Serialized as `{"title": ..., "content": "<envelope json>", "createdAt": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEntry {
    pub title: Title,
    pub content: SealedEnvelope,
    pub created_at: DateTime<Utc>,
}

/// Reference to an entry returned by `Vault::add_entry`.
///
/// Valid until the next removal in the same section; after that the vault
/// rejects it instead of guessing which entry it meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHandle {
    section: Section,
    index: usize,
    generation: u64,
}

impl EntryHandle {
    pub(crate) fn new(section: Section, index: usize, generation: u64) -> Self {
        Self {
            section,
            index,
            generation,
        }
    }

    /// Section the entry lives in.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Position of the entry when the handle was issued.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}
