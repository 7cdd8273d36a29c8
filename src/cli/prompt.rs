//! Passphrase and content prompts.
//!
//! `KEEPSAKE_PASSPHRASE` supplies the passphrase non-interactively;
//! otherwise the user is prompted with hidden input.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::auth::Session;
use crate::core::constants::PASSPHRASE_ENV;
use crate::core::vault::Vault;
use crate::error::Result;

fn from_env() -> Option<Zeroizing<String>> {
    let value = std::env::var(PASSPHRASE_ENV).ok()?;
    debug!("using passphrase from {}", PASSPHRASE_ENV);
    Some(Zeroizing::new(value))
}

/// Ask for the passphrase of an existing vault.
pub fn passphrase() -> Result<Zeroizing<String>> {
    if let Some(p) = from_env() {
        return Ok(p);
    }
    let p = Password::new().with_prompt("Passphrase").interact()?;
    Ok(Zeroizing::new(p))
}

/// Ask for a new passphrase, with confirmation.
pub fn new_passphrase() -> Result<Zeroizing<String>> {
    if let Some(p) = from_env() {
        return Ok(p);
    }
    let p = Password::new()
        .with_prompt("New passphrase")
        .with_confirmation("Confirm passphrase", "passphrases do not match")
        .interact()?;
    Ok(Zeroizing::new(p))
}

/// Prompt for the passphrase and open a session on `vault`.
///
/// # Errors
///
/// Returns `AuthError::InvalidPassphrase` if the passphrase does not match.
pub fn unlock(vault: &Vault) -> Result<Session> {
    let passphrase = passphrase()?;
    let mut session = Session::new();
    session.login(vault, &passphrase)?;
    Ok(session)
}

/// Read entry content from `given`, piped stdin, or a hidden prompt.
pub fn content(title: &str, given: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(c) = given {
        return Ok(Zeroizing::new(c));
    }

    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut input)?;
        let trimmed = input.trim_end_matches(['\r', '\n']).to_string();
        return Ok(Zeroizing::new(trimmed));
    }

    let c = Password::new()
        .with_prompt(format!("Content for {}", title))
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(c))
}
