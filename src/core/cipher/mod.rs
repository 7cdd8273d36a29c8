//! Envelope codec.
//!
//! Encrypts entry content into an [`Envelope`] and back. The only secret is
//! the passphrase; salt and iv travel with the ciphertext.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::core::kdf::KdfParams;
use crate::error::Result;

mod aes;
pub mod envelope;

pub use self::aes::AesCbc;
pub use envelope::Envelope;

/// Passphrase-based cipher.
///
/// Implementations must draw salt and iv from a CSPRNG on every `encrypt`
/// call and must fail `decrypt` rather than return altered plaintext.
pub trait Cipher {
    /// Encrypt plaintext under a key derived from `passphrase`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` or `KdfError` if encryption fails.
    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<Envelope>;

    /// Decrypt an envelope with the passphrase used to create it.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` on a wrong passphrase or a
    /// tampered envelope, and `CipherError::MalformedEnvelope` when the
    /// envelope cannot be decoded.
    fn decrypt(&self, envelope: &Envelope, passphrase: &str) -> Result<Zeroizing<String>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext with the default AES-256-CBC cipher.
///
/// This is a convenience wrapper around `AesCbc::encrypt`.
pub fn encrypt(plaintext: &str, passphrase: &str, params: &KdfParams) -> Result<Envelope> {
    AesCbc::new(*params).encrypt(plaintext, passphrase)
}

/// Decrypt an envelope with the default AES-256-CBC cipher.
///
/// This is a convenience wrapper around `AesCbc::decrypt`.
pub fn decrypt(
    envelope: &Envelope,
    passphrase: &str,
    params: &KdfParams,
) -> Result<Zeroizing<String>> {
    AesCbc::new(*params).decrypt(envelope, passphrase)
}
