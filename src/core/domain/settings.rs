//! Owner security settings.
//!
//! Stored as JSON under `securitySettings`:
//! `{"biometricsEnabled": bool, "pushNotificationsEnabled": bool, "weeklyConfirmationEnabled": bool}`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::SETTINGS_KEY;
use crate::core::store::Store;
use crate::error::{Result, VaultError};

/// Owner preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    /// Allow the biometric sensor to unlock a locked session.
    pub biometrics_enabled: bool,
    /// Deliver reminders as push notifications.
    pub push_notifications_enabled: bool,
    /// Prompt the owner for periodic life confirmation.
    pub weekly_confirmation_enabled: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            biometrics_enabled: false,
            push_notifications_enabled: false,
            weekly_confirmation_enabled: true,
        }
    }
}

impl SecuritySettings {
    /// Load settings, falling back to defaults when none are stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read, or
    /// `VaultError::Corrupt` if the stored JSON is malformed.
    pub fn load(store: &dyn Store) -> Result<Self> {
        match store.get(SETTINGS_KEY)? {
            None => {
                debug!("no security settings stored, using defaults");
                Ok(Self::default())
            }
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                VaultError::Corrupt {
                    key: SETTINGS_KEY.to_string(),
                    reason: e.to_string(),
                }
                .into()
            }),
        }
    }

    /// Persist settings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn save(&self, store: &dyn Store) -> Result<()> {
        let bytes = serde_json::to_vec(self)?;
        store.set(SETTINGS_KEY, &bytes)
    }
}
