//! Envelope wire format.
//!
//! An envelope carries everything needed to reverse one encryption except
//! the passphrase:
//!
//! ```json
//! {"encrypted": "<base64 ciphertext||tag>", "iv": "<hex>", "salt": "<hex>"}
//! ```
//!
//! `iv` and `salt` are not secret. The authentication tag rides at the end
//! of the `encrypted` payload so the three-field shape stays stable.

use base64::engine::general_purpose::STANDARD as Base64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::core::constants::{IV_LEN, SALT_LEN};
use crate::error::{CipherError, Result};

/// At-rest representation of an entry's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Base64 of `ciphertext || hmac_tag`.
    pub encrypted: String,
    /// Hex-encoded 16-byte CBC initialization vector.
    pub iv: String,
    /// Hex-encoded 16-byte key derivation salt.
    pub salt: String,
}

impl Envelope {
    /// Build an envelope from raw parts.
    pub fn from_parts(payload: &[u8], iv: &[u8; IV_LEN], salt: &[u8; SALT_LEN]) -> Self {
        Self {
            encrypted: Base64.encode(payload),
            iv: hex::encode(iv),
            salt: hex::encode(salt),
        }
    }

    /// Serialize the envelope to a JSON string.
    pub fn seal(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            CipherError::EncryptionFailed(format!("failed to serialize envelope: {}", e)).into()
        })
    }

    /// Parse an envelope from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedEnvelope` if the JSON does not have the
    /// `encrypted`/`iv`/`salt` shape.
    pub fn parse(sealed: &str) -> Result<Self> {
        serde_json::from_str(sealed)
            .map_err(|e| CipherError::MalformedEnvelope(format!("invalid envelope json: {}", e)).into())
    }

    /// Decoded initialization vector.
    pub fn iv_bytes(&self) -> Result<[u8; IV_LEN]> {
        decode_fixed::<IV_LEN>("iv", &self.iv)
    }

    /// Decoded salt.
    pub fn salt_bytes(&self) -> Result<[u8; SALT_LEN]> {
        decode_fixed::<SALT_LEN>("salt", &self.salt)
    }

    /// Decoded `ciphertext || tag` payload.
    pub fn payload(&self) -> Result<Vec<u8>> {
        Base64
            .decode(&self.encrypted)
            .map_err(|e| CipherError::MalformedEnvelope(format!("invalid base64 payload: {}", e)).into())
    }
}

fn decode_fixed<const N: usize>(field: &str, value: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(value)
        .map_err(|e| CipherError::MalformedEnvelope(format!("invalid hex in {}: {}", field, e)))?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        CipherError::MalformedEnvelope(format!("{} must be {} bytes, got {}", field, N, len)).into()
    })
}
