//! Init command - create the config and an empty vault.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::cli::{output, prompt};
use crate::core::config::{self, Config};
use crate::core::constants::VAULT_META_KEY;
use crate::core::store::{self, Store};
use crate::core::vault::Vault;
use crate::error::{ConfigError, Result};

/// Options accepted by `keepsake init`.
#[derive(Debug, Default)]
pub struct InitOptions {
    pub iterations: Option<u32>,
    pub interval_days: Option<u32>,
    pub hard_cutoff_days: Option<u32>,
}

/// Initialize keepsake in the home directory.
pub fn execute(home: Option<&Path>, options: InitOptions) -> Result<()> {
    let home = config::home_dir(home)?;
    if Config::exists(&home) {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let mut config = Config::new();
    if let Some(n) = options.iterations {
        config.vault.kdf_iterations = n;
    }
    if let Some(days) = options.interval_days {
        config.monitor.interval_days = days;
    }
    if let Some(days) = options.hard_cutoff_days {
        config.monitor.hard_cutoff_days = days;
    }
    config.validate()?;

    let passphrase = prompt::new_passphrase()?;
    let store = store::default_backend(&home, &config)?;
    provision(&home, &config, store, &passphrase)?;

    info!(home = %home.display(), "initialized");
    output::success(&format!("initialized {}", home.display()));
    output::hint(&format!(
        "record that you are alive with: {}",
        output::cmd("keepsake confirm")
    ));
    Ok(())
}

/// Create the vault, then write the config that marks `home` initialized.
///
/// The vault metadata is removed again if the config cannot be written, so
/// a retried `init` does not find a half-initialized home.
fn provision(home: &Path, config: &Config, store: Arc<dyn Store>, passphrase: &str) -> Result<()> {
    Vault::create(store.clone(), passphrase, config.vault.kdf_iterations)?;

    if let Err(e) = config.save(home) {
        warn!(error = %e, "config not saved, removing vault metadata");
        if let Err(cleanup) = store.remove(VAULT_META_KEY) {
            warn!(error = %cleanup, "failed to remove vault metadata");
        }
        return Err(e);
    }
    Ok(())
}
