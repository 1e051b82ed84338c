//! Common error types for Lockbox.

use thiserror::Error;

/// Top-level error type for Lockbox operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Key derivation rejected its input or the primitive is unavailable.
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// AEAD tag verification failed.
    ///
    /// The message deliberately does not distinguish a wrong password from
    /// tampered ciphertext; exposing the difference would act as an oracle.
    #[error("Wrong password or corrupted data")]
    Decryption,

    /// Plaintext checksum mismatch after a tag-verified decryption.
    ///
    /// Indicates corruption in metadata handling outside the AEAD boundary,
    /// usually a bug rather than an attack.
    #[error("Plaintext checksum mismatch after decryption")]
    Integrity,

    /// Malformed or truncated stored record text.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The OS secure random source is unavailable. Fatal; the engine never
    /// falls back to a weaker generator.
    #[error("Secure random source unavailable")]
    EntropyUnavailable,

    /// Cryptographic primitive failed outside the decryption path.
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Storage collaborator failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
