//! Hardening tests for the envelope codec and vault.
//!
//! These tests check that encryption round-trips, that tampering and wrong
//! passphrases are always detected, and that adversarial input never panics.

use std::sync::Arc;

use keepsake::core::cipher::{self, Envelope};
use keepsake::core::domain::Section;
use keepsake::core::kdf::KdfParams;
use keepsake::core::store::Memory;
use keepsake::core::vault::Vault;
use keepsake::error::{CipherError, Error};

const ITERATIONS: u32 = 16;

fn params() -> KdfParams {
    KdfParams::new(ITERATIONS).unwrap()
}

// ============================================================================
// Codec edge cases
// ============================================================================

#[test]
fn test_empty_and_large_plaintext() {
    let large = "y".repeat(1 << 16);
    for text in ["", "x", large.as_str()] {
        let envelope = cipher::encrypt(text, "pw", &params()).unwrap();
        assert_eq!(cipher::decrypt(&envelope, "pw", &params()).unwrap().as_str(), text);
    }
}

#[test]
fn test_block_aligned_plaintext() {
    let text = "0123456789abcdef";
    let envelope = cipher::encrypt(text, "pw", &params()).unwrap();
    assert_eq!(cipher::decrypt(&envelope, "pw", &params()).unwrap().as_str(), text);
}

#[test]
fn test_sealed_envelope_roundtrips_through_json() {
    let envelope = cipher::encrypt("line one\nline two", "pw", &params()).unwrap();
    let parsed = Envelope::parse(&envelope.seal().unwrap()).unwrap();
    assert_eq!(parsed, envelope);
    assert_eq!(
        cipher::decrypt(&parsed, "pw", &params()).unwrap().as_str(),
        "line one\nline two"
    );
}

#[test]
fn test_garbage_envelopes_fail_cleanly() {
    let cases = [
        "",
        "{}",
        "[]",
        r#"{"encrypted":"","iv":"","salt":""}"#,
        r#"{"encrypted":"!!!","iv":"00","salt":"00"}"#,
        r#"{"encrypted":"AAAA","iv":"zz","salt":"00112233445566778899aabbccddeeff"}"#,
    ];
    for case in cases {
        let result = Envelope::parse(case).and_then(|e| cipher::decrypt(&e, "pw", &params()));
        let err = result.unwrap_err();
        assert!(err.is_decryption(), "{case}: {err}");
    }
}

#[test]
fn test_swapped_salt_between_envelopes_detected() {
    let a = cipher::encrypt("alpha", "pw", &params()).unwrap();
    let mut b = cipher::encrypt("bravo", "pw", &params()).unwrap();
    b.salt = a.salt.clone();
    assert!(matches!(
        cipher::decrypt(&b, "pw", &params()).unwrap_err(),
        Error::Cipher(CipherError::DecryptionFailed(_))
    ));
}

#[test]
fn test_unicode_titles_and_content_in_vault() {
    let mut vault = Vault::create(Arc::new(Memory::new()), "pässwörd", ITERATIONS).unwrap();
    vault
        .add_entry(Section::Confessions, "告白", "я люблю 🦀", "pässwörd")
        .unwrap();
    let listing = vault.list_entries(Section::Confessions, "pässwörd").unwrap();
    assert_eq!(listing.entries[0].title, "告白");
    assert_eq!(listing.entries[0].content.as_str(), "я люблю 🦀");
}

// ============================================================================
// Property-based tests
// ============================================================================

mod proptest_tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn roundtrip_any_text(text in "\\PC{0,200}", pass in "\\PC{1,40}") {
            let envelope = cipher::encrypt(&text, &pass, &params()).unwrap();
            let plain = cipher::decrypt(&envelope, &pass, &params()).unwrap();
            prop_assert_eq!(plain.as_str(), text.as_str());
        }

        #[test]
        fn wrong_passphrase_fails(text in "\\PC{0,64}", p1 in "[a-z]{1,16}", p2 in "[a-z]{1,16}") {
            prop_assume!(p1 != p2);
            let envelope = cipher::encrypt(&text, &p1, &params()).unwrap();
            let err = cipher::decrypt(&envelope, &p2, &params()).unwrap_err();
            prop_assert!(matches!(err, Error::Cipher(CipherError::DecryptionFailed(_))));
        }

        #[test]
        fn any_flipped_byte_is_detected(text in "\\PC{1,64}", pick in any::<prop::sample::Index>(), bit in 0u8..8) {
            let envelope = cipher::encrypt(&text, "pw", &params()).unwrap();
            let mut payload = STANDARD.decode(&envelope.encrypted).unwrap();
            let at = pick.index(payload.len());
            payload[at] ^= 1 << bit;

            let tampered = Envelope {
                encrypted: STANDARD.encode(&payload),
                ..envelope
            };
            let err = cipher::decrypt(&tampered, "pw", &params()).unwrap_err();
            prop_assert!(err.is_decryption());
        }

        #[test]
        fn fresh_salt_and_iv_per_call(text in "\\PC{0,32}") {
            let a = cipher::encrypt(&text, "pw", &params()).unwrap();
            let b = cipher::encrypt(&text, "pw", &params()).unwrap();
            prop_assert_ne!(a.salt, b.salt);
            prop_assert_ne!(a.iv, b.iv);
            prop_assert_ne!(a.encrypted, b.encrypted);
        }

        #[test]
        fn removal_shifts_later_entries(count in 1usize..6, remove in any::<prop::sample::Index>()) {
            let mut vault = Vault::create(Arc::new(Memory::new()), "pw", ITERATIONS).unwrap();
            for i in 0..count {
                vault.add_entry(Section::Wishes, &format!("t{i}"), &format!("c{i}"), "pw").unwrap();
            }
            let at = remove.index(count);
            vault.remove_entry(Section::Wishes, at, "pw").unwrap();

            let listing = vault.list_entries(Section::Wishes, "pw").unwrap();
            let expected: Vec<String> = (0..count).filter(|i| *i != at).map(|i| format!("c{i}")).collect();
            let actual: Vec<String> = listing.entries.iter().map(|e| e.content.as_str().to_string()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
