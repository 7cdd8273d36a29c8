//! Error types.
//!
//! One top-level [`Error`] wraps a nested enum per concern so callers can
//! match on the failure class (`Error::Cipher(_)`, `Error::Store(_)`, ...)
//! without string inspection.

use thiserror::Error;

use crate::core::domain::Section;

/// Top-level error type for keepsake operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Kdf(#[from] KdfError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

impl Error {
    /// Whether this error came from a failed decryption (wrong passphrase,
    /// corrupted or tampered envelope).
    pub fn is_decryption(&self) -> bool {
        matches!(
            self,
            Error::Cipher(CipherError::DecryptionFailed(_) | CipherError::MalformedEnvelope(_))
        )
    }

    /// Whether this error came from the persistence layer.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}

/// Key derivation parameter errors.
///
/// These indicate programmer error: the codec always supplies well-formed
/// parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdfError {
    #[error("invalid salt length: expected {expected} bytes, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    #[error("invalid iteration count: {0} (must be at least 1)")]
    InvalidIterations(u32),

    #[error("invalid key length: {0} bits (must be a positive multiple of 8)")]
    InvalidKeyLength(usize),
}

/// Encryption and decryption errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
}

/// Vault-level errors.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("vault not initialized: run `keepsake init` first")]
    NotInitialized,

    #[error("vault already initialized")]
    AlreadyInitialized,

    #[error("index {index} out of range for section {section} ({len} entries)")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("stale entry handle for section {0}: reload the section and retry")]
    StaleHandle(Section),

    #[error("owner presumed unreachable: vault is in beneficiary-release mode")]
    ReleaseMode,

    #[error("corrupt data under key {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Persistence errors raised by a [`Store`](crate::core::store::Store).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {key}: {source}")]
    Remove {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store did not answer within {0} ms")]
    Timeout(u64),

    #[error("invalid store key: {0}")]
    InvalidKey(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("entry title cannot be empty")]
    EmptyTitle,

    #[error("entry content cannot be empty: {0}")]
    EmptyContent(String),

    #[error("unknown section '{0}': expected passwords, wishes, financial or confessions")]
    UnknownSection(String),

    #[error("passphrase cannot be empty")]
    EmptyPassphrase,
}

/// Authentication errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid passphrase")]
    InvalidPassphrase,

    #[error("session is locked")]
    Locked,

    #[error("no biometric sensor available")]
    SensorUnavailable,

    #[error("biometric unlock is disabled in security settings")]
    BiometricsDisabled,

    #[error("biometric verification failed")]
    Denied,

    #[error("no credential cached: log in with the passphrase first")]
    NoCachedCredential,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `keepsake init` first")]
    NotInitialized,

    #[error("already initialized: config.toml exists")]
    AlreadyInitialized,

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing config field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result alias for keepsake operations.
pub type Result<T> = std::result::Result<T, Error>;
