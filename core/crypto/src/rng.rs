//! Fail-closed secure random source.
//!
//! All salts, IVs and generated passwords draw from the OS cryptographic RNG.
//! If the entropy source is unavailable the operation fails; there is no
//! fallback to a weaker generator.

use rand::rngs::OsRng;
use rand::RngCore;

use lockbox_common::{Error, Result};

/// Fill `buf` with cryptographically secure random bytes.
///
/// # Errors
/// - Returns `EntropyUnavailable` if the OS random source fails
pub fn random_bytes(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|_| Error::EntropyUnavailable)
}

/// Produce a fixed-size array of cryptographically secure random bytes.
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    random_bytes(&mut out)?;
    Ok(out)
}
