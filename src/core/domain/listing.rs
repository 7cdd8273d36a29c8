//! Results of listing a section.

use chrono::{DateTime, Utc};

use super::{Entry, Section};
use crate::error::CipherError;

/// An entry that could not be decrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptFailure {
    /// Position in the section.
    pub index: usize,
    /// Title of the entry (titles are stored in clear).
    pub title: String,
    /// Creation time of the entry.
    pub created_at: DateTime<Utc>,
    /// Why decryption failed.
    pub error: CipherError,
}

/// Decrypted entries of one section plus the ones that failed.
///
/// A corrupted record never hides the rest of the section.
#[derive(Debug)]
pub struct Listing {
    pub section: Section,
    pub entries: Vec<Entry>,
    pub failures: Vec<DecryptFailure>,
}

impl Listing {
    /// Whether every entry decrypted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of entries in the section, decrypted or not.
    pub fn total(&self) -> usize {
        self.entries.len() + self.failures.len()
    }
}
