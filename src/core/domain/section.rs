//! Vault sections.

use serde::{Deserialize, Serialize};

use crate::core::constants::ENTRIES_PREFIX;
use crate::core::types::StoreKey;
use crate::error::ValidationError;

/// A named partition of the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Passwords,
    Wishes,
    Financial,
    Confessions,
}

impl Section {
    /// Every section, in display order.
    pub const ALL: [Section; 4] = [
        Section::Passwords,
        Section::Wishes,
        Section::Financial,
        Section::Confessions,
    ];

    /// Lowercase identifier used in store keys and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Passwords => "passwords",
            Section::Wishes => "wishes",
            Section::Financial => "financial",
            Section::Confessions => "confessions",
        }
    }

    /// Human-readable heading.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Passwords => "Password Manager",
            Section::Wishes => "Final Wishes",
            Section::Financial => "Financial Information",
            Section::Confessions => "Private Confessions",
        }
    }

    /// Store key holding this section's entries (`entries_<section>`).
    pub fn store_key(&self) -> StoreKey {
        format!("{}{}", ENTRIES_PREFIX, self.as_str())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == lowered)
            .ok_or_else(|| ValidationError::UnknownSection(s.to_string()))
    }
}
