//! Life-confirmation status types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived life-confirmation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifeStatus {
    /// The owner has never confirmed.
    NeedsFirstConfirmation,
    /// Confirmed within the interval.
    Alive,
    /// The interval has passed without confirmation.
    Overdue,
    /// The hard cutoff has passed without confirmation.
    PresumedUnreachable,
}

/// Who the vault should currently serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    Owner,
    BeneficiaryRelease,
}

impl LifeStatus {
    /// Whether the owner should be asked to confirm.
    pub fn needs_prompt(&self) -> bool {
        !matches!(self, LifeStatus::Alive)
    }

    /// Access mode implied by this status.
    ///
    /// The owner can always re-confirm and return to `Owner`.
    pub fn access_mode(&self) -> AccessMode {
        match self {
            LifeStatus::PresumedUnreachable => AccessMode::BeneficiaryRelease,
            _ => AccessMode::Owner,
        }
    }

    /// Short lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStatus::NeedsFirstConfirmation => "needs first confirmation",
            LifeStatus::Alive => "alive",
            LifeStatus::Overdue => "overdue",
            LifeStatus::PresumedUnreachable => "presumed unreachable",
        }
    }
}

impl std::fmt::Display for LifeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal for external workflows (owner prompt, beneficiary release).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    /// Nothing to do.
    Quiet,
    /// Ask the owner to confirm they are alive.
    PromptOwner,
    /// Start the beneficiary release workflow.
    ReleaseToBeneficiaries,
}

/// Point-in-time view of the life-confirmation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub status: LifeStatus,
    pub access: AccessMode,
    pub last_confirmed_at: Option<DateTime<Utc>>,
    /// When the owner becomes overdue (absent before the first confirmation).
    pub overdue_at: Option<DateTime<Utc>>,
    /// When the owner is presumed unreachable.
    pub unreachable_at: Option<DateTime<Utc>>,
    pub evaluated_at: DateTime<Utc>,
}
