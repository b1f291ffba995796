//! Access gate: a single plaintext comparison per invocation.
//!
//! When a secret is configured the user is prompted once, before any
//! storage access; a mismatch aborts the whole invocation. There is no
//! session, token, or expiry.

use dialoguer::Password;

use crate::error::{Error, Result};

/// Prompt for the password when a secret is configured.
///
/// # Errors
/// Returns [`Error::AccessDenied`] on mismatch, or an IO error when the
/// prompt cannot be shown.
pub fn check(secret: Option<&str>) -> Result<()> {
    let Some(secret) = secret else {
        return Ok(());
    };

    let entered = Password::new().with_prompt("Password").interact()?;
    if entered == secret {
        Ok(())
    } else {
        Err(Error::AccessDenied)
    }
}
