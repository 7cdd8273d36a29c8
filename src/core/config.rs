//! Configuration file management.
//!
//! Handles reading, writing, and validating `config.toml` in the keepsake
//! home directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::monitor::Schedule;
use crate::error::{ConfigError, Result};

/// Keepsake configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration file
    pub keepsake: Meta,
    /// Vault settings
    #[serde(default)]
    pub vault: VaultConfig,
    /// Life-confirmation schedule
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// Persistence settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Metadata section of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Vault settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// PBKDF2 iteration count used when a vault is created.
    ///
    /// Existing vaults keep the count recorded in their metadata.
    pub kdf_iterations: u32,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            kdf_iterations: constants::DEFAULT_KDF_ITERATIONS,
        }
    }
}

/// Life-confirmation schedule settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Days between required confirmations.
    pub interval_days: u32,
    /// Days without confirmation after which the owner is presumed unreachable.
    pub hard_cutoff_days: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_days: constants::DEFAULT_INTERVAL_DAYS,
            hard_cutoff_days: constants::DEFAULT_HARD_CUTOFF_DAYS,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum time to wait for a single store call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timeout_ms: constants::DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new configuration with current version and defaults.
    pub fn new() -> Self {
        Self {
            keepsake: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            vault: VaultConfig::default(),
            monitor: MonitorConfig::default(),
            store: StoreConfig::default(),
        }
    }

    /// Path to the configuration file inside `home`.
    pub fn config_path(home: &Path) -> PathBuf {
        home.join(constants::CONFIG_FILE)
    }

    /// Directory holding store files inside `home`.
    pub fn data_dir(home: &Path) -> PathBuf {
        home.join(constants::DATA_DIR)
    }

    /// Check if a configuration file exists in `home`.
    pub fn exists(home: &Path) -> bool {
        Self::config_path(home).exists()
    }

    /// Load configuration from `<home>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn load(home: &Path) -> Result<Self> {
        let path = Self::config_path(home);
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `<home>/config.toml`, creating `home` if needed.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, home: &Path) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::create_dir_all(home)?;
        std::fs::write(Self::config_path(home), contents)?;

        Ok(())
    }

    /// Life-confirmation schedule described by this configuration.
    pub fn schedule(&self) -> Result<Schedule> {
        Schedule::new(self.monitor.interval_days, self.monitor.hard_cutoff_days)
    }

    /// Validate the configuration values.
    ///
    /// Checks:
    /// - Version field is non-empty and looks like semver
    /// - KDF iteration count is at least 1 (warns below the recommended minimum)
    /// - Interval is at least one day, the cutoff lies after it, and neither
    ///   exceeds `MAX_SCHEDULE_DAYS`
    /// - Store timeout is non-zero
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingField` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.keepsake.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }
        if self.keepsake.version.split('.').count() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.keepsake.version),
            }
            .into());
        }

        if self.vault.kdf_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "vault.kdf_iterations",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.vault.kdf_iterations < constants::RECOMMENDED_MIN_ITERATIONS {
            warn!(
                iterations = self.vault.kdf_iterations,
                recommended = constants::RECOMMENDED_MIN_ITERATIONS,
                "kdf iteration count is below the recommended minimum"
            );
        }

        self.schedule()?;

        if self.store.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.timeout_ms",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Resolve the keepsake home directory.
///
/// Uses `explicit` when given (from `--home` or `KEEPSAKE_HOME`), otherwise
/// `~/.keepsake`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if no user home directory can be found.
pub fn home_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(constants::HOME_DIR))
}
