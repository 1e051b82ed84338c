//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is deliberately high so that brute-forcing the
//! password is computationally expensive. Callers should expect `derive_key`
//! to take tens of milliseconds and keep it off latency-sensitive threads.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::keys::{Salt, VaultKey, KEY_LENGTH};
use lockbox_common::{Error, Result};

/// PBKDF2 iteration count.
///
/// Fixed at compile time so derivation is reproducible for every stored
/// record; changing it would require a record format version bump.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 256-bit vault key from a password.
///
/// When `salt` is `None` a fresh 16-byte salt is generated (the "create a new
/// vault key" path). When a salt is supplied the derivation reproduces
/// byte-identical key material for the same password (the "recover the key
/// for an existing record" path).
///
/// # Errors
/// - Returns `KeyDerivation` if the password is empty
/// - Returns `EntropyUnavailable` if salt generation fails
pub fn derive_key(password: &str, salt: Option<Salt>) -> Result<VaultKey> {
    if password.is_empty() {
        return Err(Error::KeyDerivation("Password cannot be empty".to_string()));
    }

    let salt = match salt {
        Some(salt) => salt,
        None => Salt::generate()?,
    };

    let mut key = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut key,
    );

    Ok(VaultKey::new(key, salt))
}
