//! Authentication gate and session.
//!
//! The vault itself never caches a passphrase. A [`Session`] holds the
//! verified passphrase for an interactive session so that a locked session
//! can be reopened through a biometric [`AuthGate`] without retyping it.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::domain::SecuritySettings;
use crate::core::vault::Vault;
use crate::error::{AuthError, Result};

/// Device authentication capability (fingerprint, face, ...).
///
/// A successful prompt is treated as equivalent to entering the passphrase.
pub trait AuthGate {
    /// Whether the device has a usable sensor.
    fn is_sensor_available(&self) -> bool;

    /// Prompt the user and report whether verification succeeded.
    fn prompt_and_verify(&self, reason: &str) -> bool;
}

/// Gate for devices without a sensor. Always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl AuthGate for NoSensor {
    fn is_sensor_available(&self) -> bool {
        false
    }

    fn prompt_and_verify(&self, _reason: &str) -> bool {
        false
    }
}

/// Gate with a fixed answer, for headless use and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(pub bool);

impl AuthGate for FixedGate {
    fn is_sensor_available(&self) -> bool {
        true
    }

    fn prompt_and_verify(&self, _reason: &str) -> bool {
        self.0
    }
}

/// An interactive session.
#[derive(Default)]
pub struct Session {
    passphrase: Option<Zeroizing<String>>,
    locked: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .field("locked", &self.locked)
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify `passphrase` against the vault and cache it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPassphrase` on mismatch; the session is
    /// left as it was.
    pub fn login(&mut self, vault: &Vault, passphrase: &str) -> Result<()> {
        vault.verify_passphrase(passphrase)?;
        self.passphrase = Some(Zeroizing::new(passphrase.to_string()));
        self.locked = false;
        info!("session unlocked with passphrase");
        Ok(())
    }

    /// The cached passphrase.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NoCachedCredential` before login or after logout,
    /// and `AuthError::Locked` while locked.
    pub fn passphrase(&self) -> Result<&str> {
        let cached = self
            .passphrase
            .as_ref()
            .ok_or(AuthError::NoCachedCredential)?;
        if self.locked {
            return Err(AuthError::Locked.into());
        }
        Ok(cached.as_str())
    }

    pub fn is_unlocked(&self) -> bool {
        self.passphrase.is_some() && !self.locked
    }

    /// Lock the session, keeping the credential for a sensor unlock.
    pub fn lock(&mut self) {
        self.locked = true;
        debug!("session locked");
    }

    /// Unlock a locked session through the biometric gate.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::BiometricsDisabled` if the owner has not enabled
    /// biometrics, `AuthError::NoCachedCredential` if there is nothing to
    /// unlock, `AuthError::SensorUnavailable` without a sensor, or
    /// `AuthError::Denied` if verification fails.
    pub fn unlock_with_sensor(
        &mut self,
        gate: &dyn AuthGate,
        settings: &SecuritySettings,
    ) -> Result<()> {
        if !settings.biometrics_enabled {
            return Err(AuthError::BiometricsDisabled.into());
        }
        if self.passphrase.is_none() {
            return Err(AuthError::NoCachedCredential.into());
        }
        if !gate.is_sensor_available() {
            return Err(AuthError::SensorUnavailable.into());
        }
        if !gate.prompt_and_verify("Unlock your vault") {
            return Err(AuthError::Denied.into());
        }
        self.locked = false;
        info!("session unlocked with sensor");
        Ok(())
    }

    /// End the session and wipe the cached passphrase.
    pub fn logout(&mut self) {
        self.passphrase = None;
        self.locked = false;
        debug!("session ended");
    }
}
