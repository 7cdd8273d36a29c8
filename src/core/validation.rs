//! Input validation for vault operations.

use crate::error::{Result, ValidationError};

/// Validate an entry title.
///
/// Titles must contain at least one non-whitespace character.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTitle` if the title is blank.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    Ok(())
}

/// Validate entry content.
///
/// Content cannot be empty; whitespace is kept as the owner typed it.
///
/// # Arguments
///
/// * `title` - The entry title (for error messages)
/// * `content` - The plaintext to validate
///
/// # Errors
///
/// Returns `ValidationError::EmptyContent` if the content is empty.
pub fn validate_content(title: &str, content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(ValidationError::EmptyContent(title.to_string()).into());
    }
    Ok(())
}

/// Validate a passphrase.
///
/// # Errors
///
/// Returns `ValidationError::EmptyPassphrase` if the passphrase is empty.
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.is_empty() {
        return Err(ValidationError::EmptyPassphrase.into());
    }
    Ok(())
}
