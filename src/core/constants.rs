//! Constants used throughout keepsake.
//!
//! Centralizes store keys, file names, and cryptographic parameters.

/// Configuration file name inside the keepsake home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default home directory relative to the user's home (`~/.keepsake`).
pub const HOME_DIR: &str = ".keepsake";

/// Environment variable overriding the keepsake home directory.
pub const HOME_ENV: &str = "KEEPSAKE_HOME";

/// Environment variable supplying the passphrase non-interactively.
pub const PASSPHRASE_ENV: &str = "KEEPSAKE_PASSPHRASE";

/// Directory (relative to the home directory) holding store files.
pub const DATA_DIR: &str = "data";

/// Store key prefix for a section's entry list (`entries_<section>`).
pub const ENTRIES_PREFIX: &str = "entries_";

/// Store key for the last life confirmation (RFC 3339 timestamp).
pub const LAST_CONFIRMATION_KEY: &str = "lastLifeConfirmation";

/// Store key for the owner's security settings (JSON).
pub const SETTINGS_KEY: &str = "securitySettings";

/// Store key for vault metadata (iteration count and passphrase verifier).
pub const VAULT_META_KEY: &str = "vaultMeta";

/// Store key set to `"true"` by the beneficiary setup flow once complete.
pub const BENEFICIARY_SETUP_KEY: &str = "beneficiarySetup";

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// CBC initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// HMAC-SHA256 tag length in bytes.
pub const TAG_LEN: usize = 32;

/// Bits derived per envelope: a 256-bit AES key followed by a 256-bit MAC key.
pub const DERIVED_KEY_BITS: usize = 512;

/// Default PBKDF2 iteration count for new vaults.
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Iteration count below which a warning is logged.
pub const RECOMMENDED_MIN_ITERATIONS: u32 = 100_000;

/// Default life-confirmation interval in days.
pub const DEFAULT_INTERVAL_DAYS: u32 = 7;

/// Default hard cutoff after which the owner is presumed unreachable.
pub const DEFAULT_HARD_CUTOFF_DAYS: u32 = 30;

/// Upper bound for the interval and cutoff, roughly one hundred years.
pub const MAX_SCHEDULE_DAYS: u32 = 36_500;

/// Default timeout for a single store call in milliseconds.
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Plaintext sealed into the vault metadata to verify passphrases.
pub const VERIFIER_CANARY: &str = "keepsake-passphrase-check-v1";
