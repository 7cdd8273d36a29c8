//! AES-256-CBC with HMAC-SHA256 (encrypt-then-MAC).
//!
//! Each call derives 512 bits from the passphrase and a fresh salt: the
//! first half keys AES-256-CBC/PKCS#7, the second half keys the HMAC over
//! `iv || salt || ciphertext`. The tag is checked in constant time before
//! any unpadding, so a wrong passphrase or a flipped byte never yields
//! plaintext.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::envelope::Envelope;
use super::Cipher;
use crate::core::constants::{DERIVED_KEY_BITS, IV_LEN, TAG_LEN};
use crate::core::kdf::{self, KdfParams};
use crate::error::{CipherError, Result};

type Aes256CbcEnc = cbc::Encryptor<::aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<::aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

const AES_KEY_LEN: usize = 32;
const BLOCK_LEN: usize = 16;

/// Passphrase-based AES-256-CBC cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCbc {
    params: KdfParams,
}

impl AesCbc {
    /// Create a cipher using the given key stretching parameters.
    pub fn new(params: KdfParams) -> Self {
        Self { params }
    }

    /// Key stretching parameters in use.
    pub fn params(&self) -> &KdfParams {
        &self.params
    }
}

impl Cipher for AesCbc {
    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<Envelope> {
        let salt = kdf::generate_salt();
        let iv = generate_iv();
        let key = kdf::derive(passphrase, &salt, self.params.iterations, DERIVED_KEY_BITS)?;
        let (enc_key, mac_key) = key.split_at(AES_KEY_LEN);

        let mut payload = Aes256CbcEnc::new_from_slices(enc_key, &iv)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let tag = compute_tag(mac_key, &iv, &salt, &payload)?;
        payload.extend_from_slice(&tag);

        debug!(bytes = payload.len(), "sealed envelope");
        Ok(Envelope::from_parts(&payload, &iv, &salt))
    }

    fn decrypt(&self, envelope: &Envelope, passphrase: &str) -> Result<Zeroizing<String>> {
        let iv = envelope.iv_bytes()?;
        let salt = envelope.salt_bytes()?;
        let payload = envelope.payload()?;

        if payload.len() < BLOCK_LEN + TAG_LEN || (payload.len() - TAG_LEN) % BLOCK_LEN != 0 {
            return Err(CipherError::MalformedEnvelope(format!(
                "payload length {} is not a whole number of blocks plus tag",
                payload.len()
            ))
            .into());
        }
        let (ciphertext, received_tag) = payload.split_at(payload.len() - TAG_LEN);

        let key = kdf::derive(passphrase, &salt, self.params.iterations, DERIVED_KEY_BITS)?;
        let (enc_key, mac_key) = key.split_at(AES_KEY_LEN);

        let mut mac = new_mac(mac_key)?;
        mac.update(&iv);
        mac.update(&salt);
        mac.update(ciphertext);
        mac.verify_slice(received_tag).map_err(|_| {
            CipherError::DecryptionFailed("authentication tag mismatch".to_string())
        })?;

        let plaintext = Aes256CbcDec::new_from_slices(enc_key, &iv)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CipherError::DecryptionFailed("invalid padding".to_string()))?;

        let text = String::from_utf8(plaintext).map_err(|e| {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            CipherError::DecryptionFailed("plaintext is not valid UTF-8".to_string())
        })?;

        Ok(Zeroizing::new(text))
    }

    fn name(&self) -> &'static str {
        "aes-256-cbc-hmac-sha256"
    }
}

fn new_mac(key: &[u8]) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(key)
        .map_err(|e| CipherError::EncryptionFailed(format!("invalid mac key: {}", e)).into())
}

fn compute_tag(key: &[u8], iv: &[u8], salt: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut mac = new_mac(key)?;
    mac.update(iv);
    mac.update(salt);
    mac.update(ciphertext);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}
