//! Life-confirmation monitor.
//!
//! The monitor records when the owner last proved they are alive and
//! derives a [`LifeStatus`] from that timestamp and the current time. Status
//! is evaluated lazily on every read; nothing runs in the background.
//!
//! The monitor does not authenticate. Callers must pass their own gate
//! (passphrase or biometric) before calling [`Monitor::confirm`].

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::constants::{LAST_CONFIRMATION_KEY, MAX_SCHEDULE_DAYS};
use crate::core::domain::{LifeStatus, Report, SecuritySettings, Signal};
use crate::core::store::Store;
use crate::error::{ConfigError, Result};

/// Confirmation interval and hard cutoff, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    interval_days: u32,
    hard_cutoff_days: u32,
}

impl Schedule {
    /// Build a schedule.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `interval_days` is zero,
    /// `hard_cutoff_days` does not lie after it, or either exceeds
    /// `MAX_SCHEDULE_DAYS`.
    pub fn new(interval_days: u32, hard_cutoff_days: u32) -> Result<Self> {
        if interval_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.interval_days",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if hard_cutoff_days <= interval_days {
            return Err(ConfigError::InvalidValue {
                field: "monitor.hard_cutoff_days",
                reason: format!("must be greater than interval_days ({interval_days})"),
            }
            .into());
        }
        if hard_cutoff_days > MAX_SCHEDULE_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "monitor.hard_cutoff_days",
                reason: format!("must be at most {MAX_SCHEDULE_DAYS}"),
            }
            .into());
        }
        Ok(Self {
            interval_days,
            hard_cutoff_days,
        })
    }

    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    pub fn hard_cutoff_days(&self) -> u32 {
        self.hard_cutoff_days
    }

    pub fn interval(&self) -> Duration {
        Duration::days(i64::from(self.interval_days))
    }

    pub fn hard_cutoff(&self) -> Duration {
        Duration::days(i64::from(self.hard_cutoff_days))
    }

    /// When a confirmation made at `last` becomes overdue, if representable.
    pub fn overdue_at(&self, last: DateTime<Utc>) -> Option<DateTime<Utc>> {
        last.checked_add_signed(self.interval())
    }

    /// When a confirmation made at `last` stops protecting the owner, if representable.
    pub fn unreachable_at(&self, last: DateTime<Utc>) -> Option<DateTime<Utc>> {
        last.checked_add_signed(self.hard_cutoff())
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            interval_days: crate::core::constants::DEFAULT_INTERVAL_DAYS,
            hard_cutoff_days: crate::core::constants::DEFAULT_HARD_CUTOFF_DAYS,
        }
    }
}

/// Derive the status from the last confirmation and `now`.
///
/// Reaching the interval exactly counts as overdue, reaching the cutoff
/// exactly counts as unreachable. A confirmation in the future is treated
/// as alive.
pub fn evaluate(last: Option<DateTime<Utc>>, now: DateTime<Utc>, schedule: &Schedule) -> LifeStatus {
    let Some(last) = last else {
        return LifeStatus::NeedsFirstConfirmation;
    };

    let elapsed = now.signed_duration_since(last);
    if elapsed >= schedule.hard_cutoff() {
        LifeStatus::PresumedUnreachable
    } else if elapsed >= schedule.interval() {
        LifeStatus::Overdue
    } else {
        LifeStatus::Alive
    }
}

/// Dead man's switch over a [`Store`].
pub struct Monitor {
    store: Arc<dyn Store>,
    schedule: Schedule,
}

impl Monitor {
    pub fn new(store: Arc<dyn Store>, schedule: Schedule) -> Self {
        Self { store, schedule }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Read the stored last confirmation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read, or
    /// `VaultError::Corrupt` if the stored value is not an RFC 3339 timestamp.
    pub fn last_confirmed(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(raw) = self.store.get(LAST_CONFIRMATION_KEY)? else {
            return Ok(None);
        };
        let text = String::from_utf8_lossy(&raw);
        let parsed = DateTime::parse_from_rfc3339(text.trim()).map_err(|e| {
            crate::error::VaultError::Corrupt {
                key: LAST_CONFIRMATION_KEY.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Some(parsed.with_timezone(&Utc)))
    }

    /// Current status. Never fails.
    ///
    /// An unreadable or corrupt store degrades to
    /// [`LifeStatus::NeedsFirstConfirmation`] so the owner gets prompted.
    pub fn current_status(&self, now: DateTime<Utc>) -> LifeStatus {
        evaluate(self.last_confirmed_lenient(), now, &self.schedule)
    }

    /// Record that the owner is alive at `now`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the timestamp cannot be persisted. The caller
    /// must not assume the confirmation took effect.
    pub fn confirm(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let stamp = now.to_rfc3339();
        self.store.set(LAST_CONFIRMATION_KEY, stamp.as_bytes())?;
        info!(at = %stamp, "life confirmed");
        Ok(now)
    }

    /// Status plus the instants at which it will next change.
    pub fn report(&self, now: DateTime<Utc>) -> Report {
        let last = self.last_confirmed_lenient();
        let status = evaluate(last, now, &self.schedule);
        Report {
            status,
            access: status.access_mode(),
            last_confirmed_at: last,
            overdue_at: last.and_then(|t| self.schedule.overdue_at(t)),
            unreachable_at: last.and_then(|t| self.schedule.unreachable_at(t)),
            evaluated_at: now,
        }
    }

    /// Signal for the owner-prompt and beneficiary-release workflows.
    ///
    /// Disabling weekly confirmation silences owner prompts only; release
    /// still fires once the cutoff passes.
    pub fn signal(&self, now: DateTime<Utc>, settings: &SecuritySettings) -> Signal {
        let status = self.current_status(now);
        debug!(%status, "evaluating signal");
        match status {
            LifeStatus::PresumedUnreachable => Signal::ReleaseToBeneficiaries,
            LifeStatus::Alive => Signal::Quiet,
            LifeStatus::NeedsFirstConfirmation | LifeStatus::Overdue => {
                if settings.weekly_confirmation_enabled {
                    Signal::PromptOwner
                } else {
                    Signal::Quiet
                }
            }
        }
    }

    fn last_confirmed_lenient(&self) -> Option<DateTime<Utc>> {
        match self.last_confirmed() {
            Ok(last) => last,
            Err(e) => {
                warn!(error = %e, "cannot read last confirmation, treating as unconfirmed");
                None
            }
        }
    }
}
