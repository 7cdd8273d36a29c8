//! Passphrase key derivation.
//!
//! Stretches a passphrase and a 16-byte salt into symmetric key material
//! with PBKDF2-HMAC-SHA256. Derivation is deterministic: the same inputs
//! always produce the same key, which is what lets a stored envelope be
//! reopened later from its salt alone.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::constants::{DEFAULT_KDF_ITERATIONS, SALT_LEN};
use crate::error::{KdfError, Result};

/// Key stretching parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// PBKDF2 iteration count.
    pub iterations: u32,
}

impl KdfParams {
    /// Parameters with an explicit iteration count.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidIterations` if `iterations` is zero.
    pub fn new(iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(KdfError::InvalidIterations(iterations).into());
        }
        Ok(Self { iterations })
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

/// Derived key material, wiped from memory on drop.
pub struct DerivedKey(Zeroizing<Vec<u8>>);

impl DerivedKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty (never true for a derived key).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into two halves at `mid` (encryption key, MAC key).
    pub fn split_at(&self, mid: usize) -> (&[u8], &[u8]) {
        self.0.split_at(mid)
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKey([REDACTED; {}])", self.0.len())
    }
}

/// Derive a key from a passphrase and salt.
///
/// # Arguments
///
/// * `passphrase` - Owner-supplied secret
/// * `salt` - Exactly 16 random bytes
/// * `iterations` - PBKDF2 iteration count, at least 1
/// * `key_len_bits` - Output length in bits, a positive multiple of 8
///
/// # Errors
///
/// Returns `KdfError` if the salt length is wrong, `iterations` is zero, or
/// the key length is not a positive multiple of 8. Malformed parameters are
/// rejected, never replaced by defaults.
pub fn derive(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
    key_len_bits: usize,
) -> Result<DerivedKey> {
    if salt.len() != SALT_LEN {
        return Err(KdfError::InvalidSaltLength {
            expected: SALT_LEN,
            actual: salt.len(),
        }
        .into());
    }
    if iterations == 0 {
        return Err(KdfError::InvalidIterations(iterations).into());
    }
    if key_len_bits == 0 || key_len_bits % 8 != 0 {
        return Err(KdfError::InvalidKeyLength(key_len_bits).into());
    }

    let mut key = Zeroizing::new(vec![0u8; key_len_bits / 8]);
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, key.as_mut_slice());

    Ok(DerivedKey(key))
}

/// Generate a fresh salt from the operating system's CSPRNG.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
