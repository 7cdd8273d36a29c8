//! Home and store resolution helpers for CLI commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::cli::output;
use crate::core::config::{self, Config};
use crate::core::domain::{SecuritySettings, Signal};
use crate::core::monitor::Monitor;
use crate::core::store::{self, Store};
use crate::core::vault::Vault;
use crate::error::Result;

/// Everything a command needs to reach an initialized home.
pub struct Context {
    pub home: PathBuf,
    pub config: Config,
    pub store: Arc<dyn Store>,
}

impl Context {
    /// Resolve the home directory, load its config and open the store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the home has no
    /// `config.toml`, or any error from loading the config or store.
    pub fn load(home: Option<&Path>) -> Result<Self> {
        let home = config::home_dir(home)?;
        let config = Config::load(&home)?;
        let store = store::default_backend(&home, &config)?;
        Ok(Self {
            home,
            config,
            store,
        })
    }

    /// Life-confirmation monitor for this home.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the configured schedule is invalid.
    pub fn monitor(&self) -> Result<Monitor> {
        Ok(Monitor::new(self.store.clone(), self.config.schedule()?))
    }

    /// Open the vault gated on the life-confirmation monitor.
    ///
    /// Prompts the owner on stderr when a confirmation is due, and reports
    /// beneficiary-release mode once the owner is presumed unreachable.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotInitialized` or `VaultError::Corrupt` if the
    /// vault cannot be opened, or an error reading the security settings.
    pub fn open_vault(&self) -> Result<Vault> {
        let monitor = self.monitor()?;
        let settings = SecuritySettings::load(self.store.as_ref())?;

        match monitor.signal(Utc::now(), &settings) {
            Signal::Quiet => {}
            Signal::PromptOwner => {
                output::caution("life confirmation is due");
                output::hint(&format!("run: {}", output::cmd("keepsake confirm")));
            }
            Signal::ReleaseToBeneficiaries => {
                output::caution("owner presumed unreachable: vault is in beneficiary-release mode");
                output::hint(&format!(
                    "to restore owner access, run: {}",
                    output::cmd("keepsake confirm")
                ));
            }
        }

        Ok(Vault::open(self.store.clone())?.with_monitor(monitor))
    }
}
